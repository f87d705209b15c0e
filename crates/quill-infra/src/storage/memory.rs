//! In-memory post store - used in tests and for throwaway local runs.

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::{NewPost, Post, PostId};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository};

/// Post store holding the collection in a `Vec` behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, PostId> for InMemoryPostStore {
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let position = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;
        posts.remove(position);
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostStore {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        // Write lock spans id assignment and append
        let mut posts = self.posts.write().await;
        let id = PostId::next_after(&posts).ok_or(RepoError::IdsExhausted)?;
        let stored = post.with_id(id);
        posts.push(stored.clone());
        Ok(stored)
    }
}
