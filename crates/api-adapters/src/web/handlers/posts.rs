use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use domains::{Post, PostInput};

use crate::dto::{MessageResponse, PostList};
use crate::error::{decode_body, parse_id, ApiError};
use crate::web::AppState;

const RESOURCE: &str = "post";

pub async fn list(State(state): State<AppState>) -> Json<PostList> {
    Json(PostList::from(state.posts.list().await))
}

/// The body carries no author; see `PostService::create` for how one is picked.
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let input: PostInput = decode_body(&body)?;
    let post = state.posts.create(input).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    let id = parse_id(&raw_id, RESOURCE)?;
    Ok(Json(state.posts.get(id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<Post>, ApiError> {
    let id = parse_id(&raw_id, RESOURCE)?;
    let input: PostInput = decode_body(&body)?;
    Ok(Json(state.posts.update(id, input).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&raw_id, RESOURCE)?;
    state.posts.delete(id).await?;
    Ok(Json(MessageResponse::new("Post deleted successfully")))
}
