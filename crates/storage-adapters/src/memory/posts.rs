use async_trait::async_trait;
use chrono::Utc;
use domains::{DomainError, DomainResult, Post, PostId, PostInput, PostRepository, UserId};
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::IdCounter;

const RESOURCE: &str = "Post";

#[derive(Debug, Default)]
struct PostTable {
    rows: Vec<Post>,
    ids: IdCounter,
}

impl PostTable {
    fn position(&self, id: PostId) -> Option<usize> {
        self.rows.iter().position(|p| p.id == id)
    }
}

/// Process-local post store. Titles and contents carry no uniqueness rule.
#[derive(Debug, Default)]
pub struct InMemoryPostRepository {
    table: RwLock<PostTable>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Vec<Post> {
        self.table.read().await.rows.clone()
    }

    async fn create(&self, input: PostInput, author_id: UserId) -> DomainResult<Post> {
        let mut table = self.table.write().await;

        let id = table
            .ids
            .peek()
            .ok_or(DomainError::IdentityExhausted("posts"))?;
        let post = Post::new(id, input, author_id, Utc::now());
        table.rows.push(post.clone());
        table.ids.advance();

        info!(post_id = id, author_id, "post created");
        Ok(post)
    }

    async fn get(&self, id: PostId) -> DomainResult<Post> {
        debug!(post_id = id, "looking up post");
        let table = self.table.read().await;
        table
            .rows
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(RESOURCE, id))
    }

    async fn update(&self, id: PostId, input: PostInput) -> DomainResult<Post> {
        let mut table = self.table.write().await;

        let index = table
            .position(id)
            .ok_or_else(|| DomainError::not_found(RESOURCE, id))?;
        let post = &mut table.rows[index];
        post.apply(input);

        info!(post_id = id, "post updated");
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut table = self.table.write().await;

        let index = table
            .position(id)
            .ok_or_else(|| DomainError::not_found(RESOURCE, id))?;
        table.rows.remove(index);

        info!(post_id = id, "post deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, content: &str) -> PostInput {
        PostInput {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn duplicate_titles_are_allowed() {
        let repo = InMemoryPostRepository::new();

        let (first, second) = tokio_test::block_on(async {
            let first = repo.create(input("T", "C"), 1).await.unwrap();
            let second = repo.create(input("T", "C"), 1).await.unwrap();
            (first, second)
        });

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn update_leaves_author_and_created_at_alone() {
        let repo = InMemoryPostRepository::new();
        let post = repo.create(input("T", "C"), 4).await.unwrap();

        let updated = repo.update(post.id, input("T2", "C2")).await.unwrap();

        assert_eq!(updated.title, "T2");
        assert_eq!(updated.content, "C2");
        assert_eq!(updated.author_id, 4);
        assert_eq!(updated.created_at, post.created_at);
        assert!(updated.updated_at > post.updated_at);
        assert_eq!(repo.get(post.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn ids_are_not_reissued_after_delete() {
        let repo = InMemoryPostRepository::new();
        repo.create(input("a", "a"), 1).await.unwrap();
        repo.create(input("b", "b"), 1).await.unwrap();

        repo.delete(2).await.unwrap();
        assert_eq!(repo.get(2).await, Err(DomainError::not_found("Post", 2)));

        let next = repo.create(input("c", "c"), 1).await.unwrap();
        assert_eq!(next.id, 3);
    }

    #[tokio::test]
    async fn missing_post_is_not_found_for_every_operation() {
        let repo = InMemoryPostRepository::new();
        let missing = DomainError::not_found("Post", 7);

        assert_eq!(repo.get(7).await, Err(missing.clone()));
        assert_eq!(repo.update(7, input("T", "C")).await, Err(missing.clone()));
        assert_eq!(repo.delete(7).await, Err(missing));
        assert!(repo.list().await.is_empty());
    }
}
