//! Post handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::PostId;
use quill_shared::{CreatePostRequest, MessageResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /posts/create
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let post = state.pipeline.create(req.title, req.content).await?;

    Ok(HttpResponse::Created().json(post))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = PostId::parse(&path.into_inner())?;
    state.pipeline.remove(id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Post deleted successfully")))
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.pipeline.list().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = PostId::parse(&path.into_inner())?;
    let post = state.pipeline.find(id).await?;
    Ok(HttpResponse::Ok().json(post))
}
