//! Authentication handlers: register, verify, login.

use actix_web::{HttpResponse, web};
use std::sync::Arc;

use ripple_core::domain::{Profile, User};
use ripple_core::error::RepoError;
use ripple_core::ports::{PasswordService, TokenService};
use ripple_shared::dto::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserSummary, VerifyQuery,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    state: web::Data<AppState>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate input
    if req.email.is_empty() || !req.email.contains('@') {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }
    if req.password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    // Check if user already exists
    if state.users.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::Conflict("Email already registered".to_string()));
    }

    // Hash password
    let password_hash = password_service
        .hash(&req.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    // User and profile are inserted in one transaction. The unique index
    // still backstops a registration race on the same email.
    let user = User::new(req.email.clone(), password_hash);
    let profile = Profile::new(user.id, req.full_name);

    let saved = match state.users.register(user, profile).await {
        Ok(saved) => saved,
        Err(RepoError::Constraint(_)) => {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    // Mocked out-of-band delivery; a failure here must not undo the signup.
    if let Some(token) = &saved.verification_token {
        if let Err(e) = state
            .notifier
            .verification_requested(&saved.email, token)
            .await
        {
            tracing::warn!("Verification delivery failed: {}", e);
        }
    }

    Ok(HttpResponse::Created().json(RegisterResponse {
        message: "User registered. Please verify your email.".to_string(),
        user_id: saved.id,
    }))
}

/// GET /api/auth/verify?token=
pub async fn verify(
    state: web::Data<AppState>,
    query: web::Query<VerifyQuery>,
) -> AppResult<HttpResponse> {
    let redeemed = state
        .users
        .redeem_verification_token(&query.token)
        .await?;

    // A cleared token no longer matches, so a second redemption lands here.
    if redeemed.is_none() {
        return Err(AppError::BadRequest("Invalid token".to_string()));
    }

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body("<h1>Email Verified Successfully!</h1><p>You can now log in.</p>"))
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let user = state
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

    let valid = password_service
        .verify(&req.password, &user.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !valid {
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    if !user.is_verified() {
        return Err(AppError::Forbidden(
            "Please verify your email first".to_string(),
        ));
    }

    let token = token_service
        .issue_token(user.id, &user.email, user.role)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        user: UserSummary {
            id: user.id,
            email: user.email,
            role: user.role.as_str().to_string(),
        },
    }))
}
