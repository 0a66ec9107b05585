//! In-memory post store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use inkwell_core::domain::{BlogPost, NewBlogPost, PostChanges};
use inkwell_core::error::RepoError;
use inkwell_core::ports::{BaseRepository, PostStore, StoreReset};

/// In-memory post store using a HashMap with async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    posts: RwLock<HashMap<Uuid, BlogPost>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for InMemoryPostStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.get(&id).cloned())
    }

    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.values().next().cloned())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.len() as u64)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        let mut posts = self.posts.write().await;
        Ok(posts.remove(&id).is_some())
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn insert_many(&self, posts: Vec<NewBlogPost>) -> Result<Vec<BlogPost>, RepoError> {
        let records: Vec<BlogPost> = posts.into_iter().map(BlogPost::new).collect();

        // Single write lock for the whole batch
        let mut store = self.posts.write().await;
        if records.iter().any(|post| store.contains_key(&post.id)) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }
        for post in &records {
            store.insert(post.id, post.clone());
        }

        tracing::debug!(count = records.len(), "Inserted posts");
        Ok(records)
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        let mut all: Vec<BlogPost> = posts.values().cloned().collect();
        all.sort_by(|a, b| a.created.cmp(&b.created).then_with(|| a.id.cmp(&b.id)));
        Ok(all)
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        changes: PostChanges,
    ) -> Result<Option<BlogPost>, RepoError> {
        let mut posts = self.posts.write().await;
        let Some(post) = posts.get_mut(&id) else {
            tracing::debug!(post_id = %id, "Update matched no post");
            return Ok(None);
        };

        post.apply(changes);
        Ok(Some(post.clone()))
    }
}

#[async_trait]
impl StoreReset for InMemoryPostStore {
    async fn drop_all(&self) -> Result<u64, RepoError> {
        let mut posts = self.posts.write().await;
        let removed = posts.len() as u64;
        posts.clear();
        Ok(removed)
    }
}
