//! SeaORM post store.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, TransactionTrait};
use uuid::Uuid;

use inkwell_core::domain::{BlogPost, NewBlogPost, PostChanges};
use inkwell_core::error::RepoError;
use inkwell_core::ports::{BaseRepository, PostStore, StoreReset};

use super::entity::post::{self, Entity as PostEntity};
use super::sea_orm_base::{SeaOrmRepository, repo_error};

/// Post store backed by any SeaORM connection (Postgres in production).
pub type SeaOrmPostStore = SeaOrmRepository<PostEntity>;

#[async_trait]
impl PostStore for SeaOrmPostStore {
    async fn insert_many(&self, posts: Vec<NewBlogPost>) -> Result<Vec<BlogPost>, RepoError> {
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<BlogPost> = posts.into_iter().map(BlogPost::new).collect();
        let models: Vec<post::ActiveModel> = records.iter().cloned().map(Into::into).collect();

        let txn = self.db.begin().await.map_err(repo_error)?;
        PostEntity::insert_many(models)
            .exec_without_returning(&txn)
            .await
            .map_err(repo_error)?;
        txn.commit().await.map_err(repo_error)?;

        tracing::debug!(count = records.len(), "Inserted posts");
        Ok(records)
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::Created)
            .order_by_asc(post::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(repo_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        changes: PostChanges,
    ) -> Result<Option<BlogPost>, RepoError> {
        if changes.is_empty() {
            return BaseRepository::<BlogPost, Uuid>::find_by_id(self, id).await;
        }

        // A concurrent delete shows up as zero rows affected.
        let mut update = PostEntity::update_many().filter(post::Column::Id.eq(id));
        if let Some(title) = changes.title {
            update = update.col_expr(post::Column::Title, Expr::value(title));
        }
        if let Some(content) = changes.content {
            update = update.col_expr(post::Column::Content, Expr::value(content));
        }

        let result = update.exec(self.db.as_ref()).await.map_err(repo_error)?;
        if result.rows_affected == 0 {
            tracing::debug!(post_id = %id, "Update matched no post");
            return Ok(None);
        }

        tracing::debug!(post_id = %id, "Updated post");
        BaseRepository::<BlogPost, Uuid>::find_by_id(self, id).await
    }
}

#[async_trait]
impl StoreReset for SeaOrmPostStore {
    async fn drop_all(&self) -> Result<u64, RepoError> {
        let result = PostEntity::delete_many()
            .exec(self.db.as_ref())
            .await
            .map_err(repo_error)?;

        Ok(result.rows_affected)
    }
}
