use std::sync::Arc;

use domains::validation::Validate;
use domains::{DomainResult, User, UserId, UserInput, UserRepository};
use tracing::instrument;

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn list(&self) -> Vec<User> {
        self.users.list().await
    }

    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn create(&self, input: UserInput) -> DomainResult<User> {
        input.validate()?;
        self.users.create(input).await
    }

    pub async fn get(&self, id: UserId) -> DomainResult<User> {
        self.users.get(id).await
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: UserId, input: UserInput) -> DomainResult<User> {
        input.validate()?;
        self.users.update(id, input).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: UserId) -> DomainResult<()> {
        self.users.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use domains::{DomainError, MockUserRepository};
    use mockall::predicate::eq;

    fn input(username: &str, email: &str) -> UserInput {
        UserInput {
            username: username.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn invalid_input_never_reaches_the_repository() {
        let mut repo = MockUserRepository::new();
        repo.expect_create().never();
        repo.expect_update().never();
        let service = UserService::new(Arc::new(repo));

        let err = service.create(input("alice", "not-an-email")).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = service.update(1, input("", "a@x.com")).await.unwrap_err();
        assert_eq!(err, DomainError::validation("username is required"));
    }

    #[tokio::test]
    async fn create_passes_valid_input_through() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .with(eq(input("alice", "a@x.com")))
            .times(1)
            .returning(|input| Ok(User::new(1, input, Utc::now())));
        let service = UserService::new(Arc::new(repo));

        let user = service.create(input("alice", "a@x.com")).await.unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.email, "a@x.com");
    }

    #[tokio::test]
    async fn repository_errors_propagate_unchanged() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete()
            .with(eq(5))
            .returning(|id| Err(DomainError::not_found("User", id)));
        let service = UserService::new(Arc::new(repo));

        assert_eq!(service.delete(5).await, Err(DomainError::not_found("User", 5)));
    }
}
