//! Request handlers, one module per resource.
//!
//! Handlers decode the path and body, call a service and map the outcome;
//! no business rule lives here.

pub mod meta;
pub mod posts;
pub mod users;
