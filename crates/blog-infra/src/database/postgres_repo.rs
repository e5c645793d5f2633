//! PostgreSQL repository implementation.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use blog_core::domain::Post;
use blog_core::error::RepoError;
use blog_core::ports::{PostRepository, PostUpdate};

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository.
///
/// Reads are ordered by `(created, id)` so repeated calls against an
/// unchanged table return documents in the same order.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    fn ordered() -> sea_orm::Select<PostEntity> {
        PostEntity::find()
            .order_by_asc(post::Column::Created)
            .order_by_asc(post::Column::Id)
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let model: post::ActiveModel = post.into();
        let saved = model
            .insert(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(saved.into())
    }

    async fn insert_many(&self, posts: Vec<Post>) -> Result<Vec<Post>, RepoError> {
        // insert_many rejects an empty value list
        if posts.is_empty() {
            return Ok(posts);
        }

        let models: Vec<post::ActiveModel> = posts.iter().cloned().map(Into::into).collect();
        PostEntity::insert_many(models)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        // Ids are assigned client-side, so the input already is the stored form.
        Ok(posts)
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let models = Self::ordered()
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let model = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(model.map(Into::into))
    }

    async fn find_one(&self) -> Result<Option<Post>, RepoError> {
        let model = Self::ordered()
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(model.map(Into::into))
    }

    async fn count(&self) -> Result<u64, RepoError> {
        PostEntity::find()
            .count(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))
    }

    async fn update_by_id(&self, id: Uuid, changes: PostUpdate) -> Result<u64, RepoError> {
        // update_many with no columns set is a SQL error
        if changes.is_empty() {
            return Ok(0);
        }

        let mut update = PostEntity::update_many().filter(post::Column::Id.eq(id));
        if let Some(title) = changes.title {
            update = update.col_expr(post::Column::Title, Expr::value(title));
        }
        if let Some(content) = changes.content {
            update = update.col_expr(post::Column::Content, Expr::value(content));
        }

        let result = update
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.rows_affected)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<u64, RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.rows_affected)
    }

    async fn drop_all(&self) -> Result<u64, RepoError> {
        let result = PostEntity::delete_many()
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.rows_affected)
    }
}
