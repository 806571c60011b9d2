//! # Axum router
//!
//! Routes are mounted at the root; the binary serves the returned `Router`
//! as-is and tests drive it in-process.

pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use services::{PostService, UserService};

/// Static facts reported by `/` and `/health`.
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    pub service_name: String,
    pub title: String,
    pub version: String,
}

/// State shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub posts: PostService,
    pub info: Arc<ServiceInfo>,
}

impl AppState {
    pub fn new(users: UserService, posts: PostService, info: ServiceInfo) -> Self {
        Self {
            users,
            posts,
            info: Arc::new(info),
        }
    }
}

/// Builds the full application: resource routes, meta routes and the
/// standard middleware stack.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::meta::index))
        .route("/health", get(handlers::meta::health))
        .route(
            "/users",
            get(handlers::users::list).post(handlers::users::create),
        )
        .route(
            "/users/{id}",
            get(handlers::users::get)
                .put(handlers::users::update)
                .delete(handlers::users::delete),
        )
        .route(
            "/posts",
            get(handlers::posts::list).post(handlers::posts::create),
        )
        .route(
            "/posts/{id}",
            get(handlers::posts::get)
                .put(handlers::posts::update)
                .delete(handlers::posts::delete),
        )
        .fallback(handlers::meta::not_found)
        .layer(middleware::panic_recovery())
        .layer(middleware::cors_policy())
        .layer(middleware::request_tracing())
        .with_state(state)
}
