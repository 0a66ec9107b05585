use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, NewBlogPost, PostChanges};
use crate::error::RepoError;

/// Generic repository trait defining the lookups and deletes every collection
/// supports.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Any single stored entity, or `None` when the collection is empty.
    async fn find_one(&self) -> Result<Option<T>, RepoError>;

    /// Number of stored entities.
    async fn count(&self) -> Result<u64, RepoError>;

    /// Delete an entity by its ID. Returns `false` if nothing matched.
    async fn delete(&self, id: ID) -> Result<bool, RepoError>;
}

/// Blog post store.
#[async_trait]
pub trait PostStore: BaseRepository<BlogPost, Uuid> {
    /// Insert a batch of posts, all or nothing. Returns the stored records in
    /// input order.
    async fn insert_many(&self, posts: Vec<NewBlogPost>) -> Result<Vec<BlogPost>, RepoError>;

    /// Every stored post, oldest first. Ties are broken by id.
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Insert a single post.
    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, RepoError> {
        self.insert_many(vec![post])
            .await?
            .pop()
            .ok_or_else(|| RepoError::Query("insert returned no record".to_string()))
    }

    /// Apply `changes` to the post with `id`. Returns `None` if nothing matched.
    async fn update_by_id(
        &self,
        id: Uuid,
        changes: PostChanges,
    ) -> Result<Option<BlogPost>, RepoError>;
}

/// Wipes a whole collection. Only the test harness holds this.
#[async_trait]
pub trait StoreReset: Send + Sync {
    /// Remove every record. Returns how many were removed.
    async fn drop_all(&self) -> Result<u64, RepoError>;
}
