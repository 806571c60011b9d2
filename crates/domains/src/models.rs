//! # Domain Models
//!
//! These structs represent the core entities of postboard. Identities are
//! small integers handed out by the owning repository, starting at 1.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub type UserId = u32;
pub type PostId = u32;

/// Author assigned to a post created while no user exists yet.
pub const FALLBACK_AUTHOR_ID: UserId = 1;

/// A registered account. Username and email are unique across all users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Unique across all users; compared exactly, so `Alice` and `alice` are
    /// different usernames.
    pub username: String,
    /// Unique across all users, compared exactly like `username`. Claiming a
    /// value another user holds is a `Conflict`.
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A piece of content attributed to a user by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    /// Fixed at creation; updates never touch it.
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Mutable fields of a user, used for both create and full-replace update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    pub username: String,
    pub email: String,
}

/// Mutable fields of a post, used for both create and full-replace update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostInput {
    pub title: String,
    pub content: String,
}

impl User {
    pub fn new(id: UserId, input: UserInput, now: DateTime<Utc>) -> Self {
        Self {
            id,
            username: input.username,
            email: input.email,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces username and email, refreshing `updated_at`.
    pub fn apply(&mut self, input: UserInput) {
        self.username = input.username;
        self.email = input.email;
        self.updated_at = next_timestamp(self.updated_at);
    }
}

impl Post {
    pub fn new(id: PostId, input: PostInput, author_id: UserId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: input.title,
            content: input.content,
            author_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces title and content, refreshing `updated_at`.
    pub fn apply(&mut self, input: PostInput) {
        self.title = input.title;
        self.content = input.content;
        self.updated_at = next_timestamp(self.updated_at);
    }
}

/// Current time, nudged forward so it is strictly after `previous` even when
/// the system clock has not ticked since.
pub fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::nanoseconds(1)
    }
}
