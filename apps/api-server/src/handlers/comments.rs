//! Comment handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use ripple_core::domain::Comment;
use ripple_core::error::RepoError;
use ripple_shared::dto::{ContentCreatedResponse, CreateContentRequest};

use crate::middleware::auth::VerifiedUser;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/posts/:id/comments
pub async fn create(
    state: web::Data<AppState>,
    actor: VerifiedUser,
    path: web::Path<Uuid>,
    body: web::Json<CreateContentRequest>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let req = body.into_inner();

    if req.content.trim().is_empty() {
        return Err(AppError::BadRequest("Content is required".to_string()));
    }

    let comment = Comment::new(post_id, actor.0.user_id, req.content);

    // The post_id foreign key surfaces a missing post as NotFound.
    let saved = match state.comments.save(comment).await {
        Ok(saved) => saved,
        Err(RepoError::NotFound) => {
            return Err(AppError::NotFound("Post not found".to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    Ok(HttpResponse::Created().json(ContentCreatedResponse {
        id: saved.id,
        content: saved.content,
    }))
}

/// GET /api/posts/:id/comments
pub async fn list(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let comments = state.comments.list_for_post(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(comments))
}
