use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId};
use crate::error::RepoError;

/// Generic repository trait for lookups and removal by id.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID.
    ///
    /// Returns `RepoError::NotFound` and leaves the store untouched when
    /// nothing matched.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository.
///
/// Implementations must perform `insert` and `delete` as one atomic
/// read-modify-write: concurrent callers never observe or produce a lost
/// update, and never receive the same id twice.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, PostId> {
    /// All posts in insertion order.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Assign the next id (`max + 1`, or 1 when empty) and append the post.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;
}
