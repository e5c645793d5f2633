use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Post;
use crate::error::RepoError;

/// Partial change set applied by [`PostRepository::update_by_id`].
///
/// Only title and content are mutable through the public contract; author
/// and creation date stay fixed for the life of the document.
#[derive(Debug, Clone, Default)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

/// Post repository port.
///
/// Reads return documents in an order that is stable across repeated calls
/// against an unchanged store.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a single post.
    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    /// Insert a batch of posts, returning them as stored. Used for seeding.
    async fn insert_many(&self, posts: Vec<Post>) -> Result<Vec<Post>, RepoError>;

    /// All posts in stable order.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// An arbitrary post - the first in stable order, if any.
    async fn find_one(&self) -> Result<Option<Post>, RepoError>;

    async fn count(&self) -> Result<u64, RepoError>;

    /// Apply `changes` to the post with `id`. Returns the number of
    /// documents updated: 0 when the id does not exist, never an error.
    async fn update_by_id(&self, id: Uuid, changes: PostUpdate) -> Result<u64, RepoError>;

    /// Returns the number of documents removed: 0 when the id does not exist.
    async fn delete_by_id(&self, id: Uuid) -> Result<u64, RepoError>;

    /// Remove every post. Test teardown only.
    async fn drop_all(&self) -> Result<u64, RepoError>;
}
