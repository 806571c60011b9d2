//! # DomainError
//!
//! Failures a repository or service can report. The API layer maps each
//! variant onto an HTTP status; the display text is what clients see.

use thiserror::Error;

/// Message returned when a new user clashes on username or email.
pub const USER_EXISTS: &str = "User already exists";

/// Message returned when an update would make a username or email collide.
pub const USER_FIELDS_TAKEN: &str = "Username or email already exists";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No entity with the given id is present.
    #[error("{resource} not found")]
    NotFound { resource: &'static str, id: u32 },

    /// A field designated unique is already held by another entity.
    #[error("{0}")]
    Conflict(String),

    /// Malformed or missing input (empty field, bad email syntax).
    #[error("{0}")]
    Validation(String),

    /// The identity counter has no further values to hand out.
    #[error("no identities left for {0}")]
    IdentityExhausted(&'static str),
}

impl DomainError {
    pub fn not_found(resource: &'static str, id: u32) -> Self {
        DomainError::NotFound { resource, id }
    }

    pub fn conflict<T: Into<String>>(message: T) -> Self {
        DomainError::Conflict(message.into())
    }

    pub fn validation<T: Into<String>>(message: T) -> Self {
        DomainError::Validation(message.into())
    }
}

/// A specialized Result type for domain operations.
pub type DomainResult<T> = std::result::Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_resource() {
        let err = DomainError::not_found("User", 42);
        assert_eq!(err.to_string(), "User not found");
        assert_eq!(err, DomainError::NotFound { resource: "User", id: 42 });
    }

    #[test]
    fn conflict_and_validation_display_their_message() {
        assert_eq!(DomainError::conflict(USER_EXISTS).to_string(), "User already exists");
        assert_eq!(
            DomainError::validation("title is required").to_string(),
            "title is required"
        );
    }
}
