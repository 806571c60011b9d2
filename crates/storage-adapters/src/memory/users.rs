use async_trait::async_trait;
use chrono::Utc;
use domains::{
    DomainError, DomainResult, User, UserId, UserInput, UserRepository, USER_EXISTS,
    USER_FIELDS_TAKEN,
};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::IdCounter;

const RESOURCE: &str = "User";

#[derive(Debug, Default)]
struct UserTable {
    rows: Vec<User>,
    ids: IdCounter,
}

impl UserTable {
    fn position(&self, id: UserId) -> Option<usize> {
        self.rows.iter().position(|u| u.id == id)
    }

    /// True if a user other than `except` holds the username or the email.
    fn clashes(&self, input: &UserInput, except: Option<UserId>) -> bool {
        self.rows.iter().any(|u| {
            Some(u.id) != except && (u.username == input.username || u.email == input.email)
        })
    }
}

/// Process-local user store.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Vec<User> {
        self.table.read().await.rows.clone()
    }

    async fn create(&self, input: UserInput) -> DomainResult<User> {
        let mut table = self.table.write().await;

        if table.clashes(&input, None) {
            warn!(username = %input.username, "rejected duplicate user");
            return Err(DomainError::conflict(USER_EXISTS));
        }

        let id = table
            .ids
            .peek()
            .ok_or(DomainError::IdentityExhausted("users"))?;
        let user = User::new(id, input, Utc::now());
        table.rows.push(user.clone());
        table.ids.advance();

        info!(user_id = id, "user created");
        Ok(user)
    }

    async fn get(&self, id: UserId) -> DomainResult<User> {
        debug!(user_id = id, "looking up user");
        let table = self.table.read().await;
        table
            .rows
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(RESOURCE, id))
    }

    async fn update(&self, id: UserId, input: UserInput) -> DomainResult<User> {
        let mut table = self.table.write().await;

        let index = table
            .position(id)
            .ok_or_else(|| DomainError::not_found(RESOURCE, id))?;

        if table.clashes(&input, Some(id)) {
            warn!(user_id = id, "rejected user update clashing with another user");
            return Err(DomainError::conflict(USER_FIELDS_TAKEN));
        }

        let user = &mut table.rows[index];
        user.apply(input);

        info!(user_id = id, "user updated");
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let mut table = self.table.write().await;

        let index = table
            .position(id)
            .ok_or_else(|| DomainError::not_found(RESOURCE, id))?;
        // `remove` shifts the tail left, keeping the others in order.
        table.rows.remove(index);

        info!(user_id = id, "user deleted");
        Ok(())
    }

    async fn first_id(&self) -> Option<UserId> {
        self.table.read().await.rows.first().map(|u| u.id)
    }
}
