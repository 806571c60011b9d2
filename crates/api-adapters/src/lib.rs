//! # api-adapters
//!
//! The HTTP surface of postboard. Response payload types live in [`dto`] and
//! compile without a web stack; the axum router, handlers and middleware sit
//! behind the `web-axum` feature.

pub mod dto;

#[cfg(feature = "web-axum")]
pub mod error;
#[cfg(feature = "web-axum")]
pub mod web;

#[cfg(feature = "web-axum")]
pub use error::ApiError;
#[cfg(feature = "web-axum")]
pub use web::{router, AppState, ServiceInfo};
