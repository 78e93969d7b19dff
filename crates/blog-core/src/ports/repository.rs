use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostFilter, PostPatch};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity.
    async fn create(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID, returning whether it existed.
    async fn delete(&self, id: ID) -> Result<bool, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// Posts exactly matching `filter`, at most `limit` of them.
    async fn find(&self, filter: &PostFilter, limit: u64) -> Result<Vec<Post>, RepoError>;

    /// Apply a partial update, returning the updated post.
    ///
    /// Fails with [`RepoError::NotFound`] when no post has this ID.
    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Post, RepoError>;
}
