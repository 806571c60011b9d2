use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use domains::{User, UserInput};

use crate::dto::{MessageResponse, UserList};
use crate::error::{decode_body, parse_id, ApiError};
use crate::web::AppState;

const RESOURCE: &str = "user";

pub async fn list(State(state): State<AppState>) -> Json<UserList> {
    Json(UserList::from(state.users.list().await))
}

pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let input: UserInput = decode_body(&body)?;
    let user = state.users.create(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&raw_id, RESOURCE)?;
    Ok(Json(state.users.get(id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&raw_id, RESOURCE)?;
    let input: UserInput = decode_body(&body)?;
    Ok(Json(state.users.update(id, input).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&raw_id, RESOURCE)?;
    state.users.delete(id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}
