//! Error handling - maps failures to `{error}` responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use ripple_shared::ErrorResponse;
use std::fmt;

/// Application-level error type.
///
/// Status mapping follows the taxonomy: missing credential 401, refused
/// action 403, absent resource 404, unique-constraint clash 409,
/// malformed input 400.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    Conflict(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::NotFound(msg)
            | AppError::BadRequest(msg)
            | AppError::Unauthorized(msg)
            | AppError::Forbidden(msg)
            | AppError::Conflict(msg) => ErrorResponse::new(msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ErrorResponse::new("Internal server error")
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<ripple_core::error::RepoError> for AppError {
    fn from(err: ripple_core::error::RepoError) -> Self {
        match err {
            ripple_core::error::RepoError::NotFound => {
                AppError::NotFound("Resource not found".to_string())
            }
            ripple_core::error::RepoError::Constraint(msg) => AppError::Conflict(msg),
            ripple_core::error::RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            ripple_core::error::RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

impl From<ripple_core::ports::AuthError> for AppError {
    fn from(err: ripple_core::ports::AuthError) -> Self {
        use ripple_core::ports::AuthError;

        match err {
            // Absent credential vs invalid credential: 401 vs 403.
            AuthError::MissingAuth => AppError::Unauthorized("Unauthorized".to_string()),
            AuthError::InvalidCredentials => {
                AppError::Unauthorized("Invalid credentials".to_string())
            }
            AuthError::TokenExpired => AppError::Forbidden("Token expired".to_string()),
            AuthError::InvalidToken(_) => AppError::Forbidden("Forbidden".to_string()),
            AuthError::InsufficientPermissions => AppError::Forbidden("Forbidden".to_string()),
            AuthError::HashingError(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
