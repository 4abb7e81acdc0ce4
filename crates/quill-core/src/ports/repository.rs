use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId};
use crate::error::RepoError;

/// Post repository - the persistence port for the blog.
///
/// Every operation is a single statement against the posts table; there are
/// no multi-row transactions behind this trait.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts with `status = published`, newest first. The public feed.
    async fn list_published(&self) -> Result<Vec<Post>, RepoError>;

    /// Every post regardless of status, newest first. The admin listing.
    async fn list_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError>;

    /// Insert a new post and return it, id and timestamps assigned.
    /// Media columns are written only when the payload carries a value.
    async fn create(&self, draft: NewPost) -> Result<Post, RepoError>;

    /// Overwrite all mandatory fields of an existing post. Media columns
    /// follow the same only-when-present rule as `create`, so an omitted
    /// URL never clobbers a stored one. `updated_at` is refreshed by the
    /// store. Fails with `RepoError::NotFound` when no row matched.
    async fn update(&self, id: PostId, draft: NewPost) -> Result<Post, RepoError>;

    /// Delete a post. Idempotent: deleting a missing id succeeds.
    async fn delete(&self, id: PostId) -> Result<(), RepoError>;
}
