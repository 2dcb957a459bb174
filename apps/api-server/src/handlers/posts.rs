//! Post handlers: feed listing, creation, deletion, likes.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use ripple_core::domain::Post;
use ripple_core::error::RepoError;
use ripple_core::ports::SortOrder;
use ripple_shared::MessageResponse;
use ripple_shared::dto::{ContentCreatedResponse, CreateContentRequest, FeedQuery};

use crate::middleware::auth::{Identity, VerifiedUser};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const DEFAULT_PAGE_SIZE: u64 = 10;
const MAX_PAGE_SIZE: u64 = 100;

/// GET /api/posts?page&size&sort
pub async fn list(state: web::Data<AppState>, query: web::Query<FeedQuery>) -> AppResult<HttpResponse> {
    let page = query.page.unwrap_or(0);
    let size = query.size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    let sort = match query.sort.as_deref() {
        Some("asc") => SortOrder::Asc,
        _ => SortOrder::Desc,
    };

    let posts = state.posts.list_page(page, size, sort).await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    actor: VerifiedUser,
    body: web::Json<CreateContentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    if req.content.trim().is_empty() {
        return Err(AppError::BadRequest("Content is required".to_string()));
    }

    let post = Post::new(actor.0.user_id, req.content);
    let saved = state.posts.save(post).await?;

    if let Err(e) = state.notifier.post_created(saved.id).await {
        tracing::warn!("Analytics notification failed: {}", e);
    }

    Ok(HttpResponse::Created().json(ContentCreatedResponse {
        id: saved.id,
        content: saved.content,
    }))
}

/// DELETE /api/posts/:id
pub async fn delete(
    state: web::Data<AppState>,
    actor: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();

    let post = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    // Owner-or-admin, checked before any write.
    if post.user_id != actor.user_id && !actor.is_admin() {
        return Err(AppError::Forbidden(
            "Not allowed to delete this post".to_string(),
        ));
    }

    state.posts.delete(post_id).await?;

    tracing::debug!(%post_id, actor = %actor.user_id, "Post deleted");

    Ok(HttpResponse::Ok().json(MessageResponse::new("Post deleted")))
}

/// POST /api/posts/:id/like
pub async fn like(
    state: web::Data<AppState>,
    actor: VerifiedUser,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();

    match state.likes.like(post_id, actor.0.user_id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(MessageResponse::new("Post liked"))),
        Err(RepoError::Constraint(_)) => {
            Err(AppError::Conflict("Post already liked".to_string()))
        }
        Err(RepoError::NotFound) => Err(AppError::NotFound("Post not found".to_string())),
        Err(e) => Err(e.into()),
    }
}
