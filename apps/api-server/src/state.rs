//! Application state - shared across all handlers.

use std::sync::Arc;

use sea_orm::DbConn;

use ripple_core::ports::{
    CommentRepository, LikeRepository, Notifier, PostRepository, UserRepository,
};
use ripple_infra::database::{
    PostgresCommentRepository, PostgresLikeRepository, PostgresPostRepository,
    PostgresUserRepository,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub likes: Arc<dyn LikeRepository>,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    /// Wire the Postgres repositories onto a shared connection pool.
    pub fn new(db: DbConn, notifier: Arc<dyn Notifier>) -> Self {
        let state = Self {
            users: Arc::new(PostgresUserRepository::new(db.clone())),
            posts: Arc::new(PostgresPostRepository::new(db.clone())),
            comments: Arc::new(PostgresCommentRepository::new(db.clone())),
            likes: Arc::new(PostgresLikeRepository::new(db)),
            notifier,
        };

        tracing::info!("Application state initialized");
        state
    }
}
