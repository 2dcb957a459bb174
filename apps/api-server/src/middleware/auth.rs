//! Authentication extractors.
//!
//! `Identity` requires a valid bearer token; `VerifiedUser` additionally
//! requires the account's email to be verified, re-read from the store on
//! every request. Checks apply in that order on mutating endpoints.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use futures::future::LocalBoxFuture;
use std::future::{Ready, ready};
use std::sync::Arc;

use ripple_core::domain::Role;
use ripple_core::ports::{AuthError, TokenClaims, TokenService};

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Authenticated user identity extractor.
///
/// Use this in handlers to require authentication:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, user {}!", identity.user_id)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: uuid::Uuid,
    pub email: String,
    pub role: Role,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.user_id,
            email: claims.email,
            role: claims.role,
        }
    }
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        // Get token service from app data
        let token_service = match req.app_data::<web::Data<Arc<dyn TokenService>>>() {
            Some(service) => service,
            None => {
                tracing::error!("TokenService not found in app data");
                return ready(Err(AppError::Internal(
                    "Server configuration error".to_string(),
                )));
            }
        };

        // Absent credential: 401. Everything past this point is 403.
        let auth_header = match req.headers().get(header::AUTHORIZATION) {
            Some(value) => value,
            None => return ready(Err(AuthError::MissingAuth.into())),
        };

        let auth_str = match auth_header.to_str() {
            Ok(s) => s,
            Err(_) => {
                return ready(Err(AuthError::InvalidToken(
                    "Invalid authorization header".to_string(),
                )
                .into()));
            }
        };

        // Parse "Bearer <token>"
        let token = match auth_str.strip_prefix("Bearer ") {
            Some(t) => t,
            None => {
                return ready(Err(AuthError::InvalidToken(
                    "Expected Bearer token".to_string(),
                )
                .into()));
            }
        };

        match token_service.validate_token(token) {
            Ok(claims) => ready(Ok(Identity::from(claims))),
            Err(e) => ready(Err(e.into())),
        }
    }
}

/// Identity whose account has passed email verification.
///
/// Verification status lives in the store, not in the token, so a fresh
/// read happens per request.
#[derive(Debug, Clone)]
pub struct VerifiedUser(pub Identity);

impl FromRequest for VerifiedUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let identity = Identity::from_request(req, payload).into_inner();
        let state = req.app_data::<web::Data<AppState>>().cloned();

        Box::pin(async move {
            let identity = identity?;

            let state = state.ok_or_else(|| {
                tracing::error!("AppState not found in app data");
                AppError::Internal("Server configuration error".to_string())
            })?;

            let user = state
                .users
                .find_by_id(identity.user_id)
                .await?
                .ok_or_else(|| AppError::Forbidden("Email verification required".to_string()))?;

            if !user.is_verified() {
                return Err(AppError::Forbidden(
                    "Email verification required".to_string(),
                ));
            }

            Ok(VerifiedUser(identity))
        })
    }
}
