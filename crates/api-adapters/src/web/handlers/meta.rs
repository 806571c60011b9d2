use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

use crate::dto::{EndpointDirectory, ErrorBody, HealthResponse, IndexResponse};
use crate::web::AppState;

pub async fn index(State(state): State<AppState>) -> Json<IndexResponse> {
    Json(IndexResponse {
        message: state.info.title.clone(),
        version: state.info.version.clone(),
        endpoints: EndpointDirectory::standard(),
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.info.service_name.clone(),
        timestamp: Utc::now(),
    })
}

pub async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Route not found".to_string(),
        }),
    )
}
