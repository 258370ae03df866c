//! User infrastructure

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::DomainError;
use crate::domain::user::{User, UserId, UserRepository};

/// In-memory user store
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.contains_key(user.id()) {
            return Err(DomainError::conflict(format!(
                "User '{}' already exists",
                user.id()
            )));
        }

        if users.values().any(|u| u.username() == user.username()) {
            return Err(DomainError::conflict(format!(
                "Username '{}' is taken",
                user.username()
            )));
        }

        users.insert(user.id().clone(), user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, username: &str) -> User {
        User::new(UserId::new(id).unwrap(), username, "Someone@Corp.com").unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(user("user1", "jane")).await.unwrap();

        let fetched = repo.get(created.id()).await.unwrap().unwrap();
        assert_eq!(fetched.username(), "jane");
        assert_eq!(fetched.email(), "someone@corp.com");
    }

    #[tokio::test]
    async fn test_duplicate_username() {
        let repo = InMemoryUserRepository::new();
        repo.create(user("user1", "jane")).await.unwrap();

        let result = repo.create(user("user2", "jane")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_missing_user() {
        let repo = InMemoryUserRepository::new();
        let id = UserId::new("nobody").unwrap();
        assert!(repo.get(&id).await.unwrap().is_none());
    }
}
