//! # services
//!
//! Use cases sitting between the HTTP adapters and the storage ports. They
//! validate input, then delegate; the repositories enforce uniqueness and
//! hand out identities.

pub mod post_service;
pub mod user_service;

pub use post_service::PostService;
pub use user_service::UserService;
