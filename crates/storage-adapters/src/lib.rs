//! # storage-adapters
//!
//! Implementations of the `domains` storage ports. Only the in-process
//! `memory` backend exists; data does not survive a restart.

#[cfg(feature = "memory")]
pub mod memory;

#[cfg(feature = "memory")]
pub use memory::{InMemoryPostRepository, InMemoryUserRepository};
