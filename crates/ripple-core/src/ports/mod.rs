//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod notifier;
mod repository;

pub use auth::{AuthError, PasswordService, TokenClaims, TokenService};
pub use notifier::{Notifier, NotifyError};
pub use repository::{
    BaseRepository, CommentRepository, CommentView, FeedPost, LikeRepository, PostRepository,
    SortOrder, UserRepository,
};
