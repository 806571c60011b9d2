//! In-memory repositories.
//!
//! Each repository keeps an insertion-ordered `Vec` behind a
//! `tokio::sync::RwLock`. Writers take the lock exclusively for the whole
//! check-assign-append sequence; readers clone out a snapshot.

mod posts;
mod users;

pub use posts::InMemoryPostRepository;
pub use users::InMemoryUserRepository;

/// Monotonic identity source. Values are handed out once and never reused,
/// deletes included.
#[derive(Debug)]
pub(crate) struct IdCounter {
    next: Option<u32>,
}

impl IdCounter {
    pub(crate) fn new() -> Self {
        Self { next: Some(1) }
    }

    /// The value the next successful create will receive.
    pub(crate) fn peek(&self) -> Option<u32> {
        self.next
    }

    /// Consumes the value returned by `peek`.
    pub(crate) fn advance(&mut self) {
        self.next = self.next.and_then(|n| n.checked_add(1));
    }
}

impl Default for IdCounter {
    fn default() -> Self {
        Self::new()
    }
}
