//! Post CRUD handlers.
//!
//! Each handler performs exactly one store call. Update and delete return
//! 200 even when the target row never existed, a contract existing clients
//! rely on; the store-level no-op is logged so it stays observable.

use actix_web::{HttpResponse, web};

use quill_core::domain::{NewPost, Post, PostId, PostStatus, normalize_media};
use quill_core::error::RepoError;
use quill_shared::dto::{ConfirmationResponse, PostPayload};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts - published posts only.
pub async fn list_published(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts: Vec<Post> = state.posts.list_published().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/admin/posts - every post, drafts included.
pub async fn list_all(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts: Vec<Post> = state.posts.list_all().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id} - a single post, any status.
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let raw = path.into_inner();
    let id = parse_post_id(&raw)?;

    match state.posts.find_by_id(id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Err(AppError::NotFound(format!("post {id} not found"))),
    }
}

/// POST /api/posts - create a post.
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let draft = draft_from_payload(body.into_inner())?;
    let post = state.posts.create(draft).await?;

    Ok(HttpResponse::Created().json(ConfirmationResponse::created(post.id, "Post created")))
}

/// PUT /api/posts/{id} - full update of all mandatory fields.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let raw = path.into_inner();
    let draft = draft_from_payload(body.into_inner())?;

    if let Some(id) = writable_post_id(&raw, "update") {
        match state.posts.update(id, draft).await {
            Ok(_) => {}
            Err(RepoError::NotFound) => {
                tracing::warn!(post_id = id, "update matched no row");
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(HttpResponse::Ok().json(ConfirmationResponse::new("Post updated")))
}

/// DELETE /api/posts/{id} - hard delete, idempotent.
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let raw = path.into_inner();
    if let Some(id) = writable_post_id(&raw, "delete") {
        state.posts.delete(id).await?;
    }

    Ok(HttpResponse::Ok().json(ConfirmationResponse::new("Post deleted")))
}

/// A path id that is not an integer can never match a row, so the read
/// path reports it as NotFound rather than a server error.
fn parse_post_id(raw: &str) -> Result<PostId, AppError> {
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("post {raw} not found")))
}

/// Write-path variant: a non-numeric id is the same silent no-op as a
/// missing row, logged and skipped rather than failed.
fn writable_post_id(raw: &str, op: &str) -> Option<PostId> {
    match raw.parse() {
        Ok(id) => Some(id),
        Err(_) => {
            tracing::warn!(raw_id = %raw, "{op} with non-numeric id");
            None
        }
    }
}

/// Shape the untyped request body into the fixed write payload, shared by
/// create and update: required fields checked, status parsed (defaulting
/// to draft), blank media folded to absent.
fn draft_from_payload(payload: PostPayload) -> Result<NewPost, AppError> {
    let status = match payload.status.as_deref() {
        None => PostStatus::Draft,
        Some(raw) => raw.parse::<PostStatus>()?,
    };

    let draft = NewPost {
        title: payload.title.unwrap_or_default(),
        content: payload.content.unwrap_or_default(),
        meta_title: payload.meta_title,
        meta_description: payload.meta_description,
        tags: payload.tags,
        status,
        image_url: normalize_media(payload.image_url),
        video_url: normalize_media(payload.video_url),
    };
    draft.validate()?;

    Ok(draft)
}
