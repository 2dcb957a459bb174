//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "fullName", default)]
    pub full_name: String,
}

/// Response to a successful registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public view of a user returned alongside a token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub email: String,
    pub role: String,
}

/// Response to a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserSummary,
}

/// Query parameter for the verification link.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyQuery {
    pub token: String,
}

/// Request to create a post or a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateContentRequest {
    pub content: String,
}

/// Response carrying the id of freshly created content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentCreatedResponse {
    pub id: Uuid,
    pub content: String,
}

/// Feed pagination query. Unset fields fall back to the defaults
/// (page 0, size 10, newest first).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedQuery {
    pub page: Option<u64>,
    pub size: Option<u64>,
    pub sort: Option<String>,
}
