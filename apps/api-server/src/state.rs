//! Application state - shared across all handlers.

use std::sync::Arc;

use migration::SchemaReady;
use quill_core::ports::PostRepository;
use quill_infra::PostgresPostRepository;
use sea_orm::DbConn;

/// Shared application state.
///
/// Construction requires the [`SchemaReady`] token, so a server can only
/// be assembled after bootstrap has completed.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    pub fn new(db: DbConn, _schema: SchemaReady) -> Self {
        Self {
            posts: Arc::new(PostgresPostRepository::new(db)),
        }
    }

    /// Assemble state around an arbitrary repository. Used by tests to run
    /// the full HTTP surface against an in-memory store.
    #[cfg(test)]
    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }
}
