use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Comment, Post, Profile, User};
use crate::error::RepoError;

/// Feed sort order by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Desc
    }
}

/// A feed row: post joined with its author and live aggregate counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedPost {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub email: String,
    pub full_name: String,
    pub like_count: i64,
    pub comment_count: i64,
}

/// A comment joined with the commenter's display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentView {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub full_name: String,
}

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository - the credential store.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Insert a user and their profile atomically.
    /// Fails with `RepoError::Constraint` when the email is already taken.
    async fn register(&self, user: User, profile: Profile) -> Result<User, RepoError>;

    /// Redeem a one-time verification token: marks the user verified and
    /// clears the token. Returns `None` when no user holds the token,
    /// which also covers a second redemption of the same token.
    async fn redeem_verification_token(&self, token: &str) -> Result<Option<User>, RepoError>;
}

/// Post repository - content store plus the feed query.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// Paginated feed: posts joined with author identity and live
    /// like/comment counts, ordered by creation time per `sort`.
    async fn list_page(
        &self,
        page: u64,
        size: u64,
        sort: SortOrder,
    ) -> Result<Vec<FeedPost>, RepoError>;
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, Uuid> {
    /// Comments on a post with commenter names, newest first.
    async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<CommentView>, RepoError>;
}

/// Like repository. The (post, user) pair is unique.
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Record a like. Fails with `RepoError::Constraint` on a duplicate
    /// pair and `RepoError::NotFound` when the post does not exist.
    async fn like(&self, post_id: Uuid, user_id: Uuid) -> Result<(), RepoError>;
}
