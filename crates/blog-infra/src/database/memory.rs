//! In-memory post repository - used by tests and as fallback when no
//! database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::Post;
use blog_core::error::RepoError;
use blog_core::ports::{PostRepository, PostUpdate};

/// In-memory repository backed by a Vec behind an async RwLock.
///
/// Documents keep insertion order, which makes reads stable across repeated
/// calls. Note: data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        store.push(post.clone());
        Ok(post)
    }

    async fn insert_many(&self, posts: Vec<Post>) -> Result<Vec<Post>, RepoError> {
        let mut store = self.store.write().await;
        store.extend(posts.iter().cloned());
        Ok(posts)
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|p| p.id == id).cloned())
    }

    async fn find_one(&self) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.first().cloned())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        let store = self.store.read().await;
        Ok(store.len() as u64)
    }

    async fn update_by_id(&self, id: Uuid, changes: PostUpdate) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;
        match store.iter_mut().find(|p| p.id == id) {
            Some(post) => {
                if let Some(title) = changes.title {
                    post.title = title;
                }
                if let Some(content) = changes.content {
                    post.content = content;
                }
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|p| p.id != id);
        Ok((before - store.len()) as u64)
    }

    async fn drop_all(&self) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;
        let removed = store.len() as u64;
        store.clear();
        Ok(removed)
    }
}
