//! In-memory user store for tests and local experimentation.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::entities::User;
use crate::types::{UserError, UserId, UserResult};

use super::UserStore;

/// HashMap-backed implementation of [`UserStore`].
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
    next_id: Arc<RwLock<UserId>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }
}

// Ids start at 1; 0 marks a not-yet-persisted user.
impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|user| user.email == email).cloned())
    }

    async fn email_exists(&self, email: &str) -> UserResult<bool> {
        let users = self.users.read().await;
        Ok(users.values().any(|user| user.email == email))
    }

    async fn create(&self, user: &User) -> UserResult<User> {
        if self.email_exists(&user.email).await? {
            return Err(UserError::EmailAlreadyExists);
        }

        let mut next_id = self.next_id.write().await;
        let id = *next_id;
        *next_id += 1;

        let mut stored = user.clone();
        stored.id = id;

        let mut users = self.users.write().await;
        users.insert(id, stored.clone());
        Ok(stored)
    }

    async fn save(&self, user: &User) -> UserResult<()> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Err(UserError::UserNotFound);
        }
        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn delete(&self, id: UserId) -> UserResult<()> {
        let mut users = self.users.write().await;
        users
            .remove(&id)
            .map(|_| ())
            .ok_or(UserError::UserNotFound)
    }
}
