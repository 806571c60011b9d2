//! # Ports
//!
//! Storage contracts for users and posts. Any adapter must implement these
//! traits to be wired into the binary.
//!
//! Implementations must serialize mutations per repository: the uniqueness
//! check, identity assignment and write happen as one atomic step, and readers
//! never see a half-applied change.

use async_trait::async_trait;

use crate::errors::DomainResult;
use crate::models::{Post, PostId, PostInput, User, UserId, UserInput};

/// Owns the user collection and its identity counter.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in insertion order.
    async fn list(&self) -> Vec<User>;

    /// Fails with `Conflict` if any user already holds the username or the email.
    async fn create(&self, input: UserInput) -> DomainResult<User>;

    async fn get(&self, id: UserId) -> DomainResult<User>;

    /// Fails with `NotFound` first, then `Conflict` if another user holds
    /// either requested value.
    async fn update(&self, id: UserId, input: UserInput) -> DomainResult<User>;

    async fn delete(&self, id: UserId) -> DomainResult<()>;

    /// Id of the first user in list order.
    async fn first_id(&self) -> Option<UserId>;
}

/// Owns the post collection and its identity counter.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn list(&self) -> Vec<Post>;

    /// Stores a post under the already resolved `author_id`. Never conflicts.
    async fn create(&self, input: PostInput, author_id: UserId) -> DomainResult<Post>;

    async fn get(&self, id: PostId) -> DomainResult<Post>;

    /// Replaces title and content; the author is left as is.
    async fn update(&self, id: PostId, input: PostInput) -> DomainResult<Post>;

    async fn delete(&self, id: PostId) -> DomainResult<()>;
}
