//! Blog post CRUD handlers.
//!
//! Each handler is one linear pipeline: parse the path parameter if
//! any, validate the body if any, hit the store, map the outcome to a
//! status code. No retries, no partial-failure recovery beyond the
//! status itself.

use actix_web::{HttpResponse, web};

use blog_core::domain::PostDraft;
use blog_shared::dto::{ListQuery, PostPayload};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Parse a `/posts/{id}` path segment. Anything that is not a
/// non-negative integer is a client error, never a "not found".
fn parse_post_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id >= 0)
        .ok_or_else(|| AppError::BadRequest(format!("invalid post id '{raw}'")))
}

fn draft_from(payload: PostPayload) -> PostDraft {
    PostDraft {
        title: payload.title,
        content: payload.content,
        category: payload.category,
        tags: payload.tags,
    }
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let draft = draft_from(body.into_inner());
    draft.validate().map_err(AppError::Validation)?;

    let post = state.posts.create(draft).await?;
    tracing::info!(post_id = post.id, "Created post");

    Ok(HttpResponse::Created().json(post))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {id} not found")))?;

    Ok(HttpResponse::Ok().json(post))
}

/// GET /posts?term=
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let term = query
        .term
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());

    let posts = state.posts.list(term).await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;

    let draft = draft_from(body.into_inner());
    draft.validate().map_err(AppError::Validation)?;

    let post = state
        .posts
        .update(id, draft)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {id} not found")))?;
    tracing::info!(post_id = post.id, "Updated post");

    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;

    state.posts.delete(id).await?;
    tracing::info!(post_id = id, "Deleted post");

    Ok(HttpResponse::NoContent().finish())
}
