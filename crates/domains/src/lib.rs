//! # domains
//!
//! The entities, errors and storage ports of postboard. Nothing in here does
//! I/O; adapters plug into the traits in [`ports`].

pub mod errors;
pub mod models;
pub mod ports;
pub mod validation;

// Re-exporting for easier access in other crates
pub use errors::*;
pub use models::*;
pub use ports::*;
