//! In-memory credential store with a unique username index.

use std::collections::HashSet;
use std::sync::RwLock;

use async_trait::async_trait;

use super::POISONED;
use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{NewUser, User, UserId};

#[derive(Default)]
struct UserTable {
    records: Vec<User>,
    usernames: HashSet<String>,
}

/// User repository holding records in insertion order.
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
}

impl InMemoryUserRepository {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| UserRepositoryError::query(POISONED))?;
        let username = user.username.as_ref().to_owned();
        if !table.usernames.insert(username.clone()) {
            return Err(UserRepositoryError::duplicate_username(username));
        }
        let stored = user.into_user(UserId::random());
        table.records.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| UserRepositoryError::query(POISONED))?;
        let slot = table
            .records
            .iter_mut()
            .find(|stored| stored.id() == user.id())
            .ok_or_else(|| UserRepositoryError::missing(user.id().to_string()))?;
        *slot = user.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        let table = self
            .table
            .read()
            .map_err(|_| UserRepositoryError::query(POISONED))?;
        Ok(table.records.iter().find(|user| user.id() == id).cloned())
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, UserRepositoryError> {
        let table = self
            .table
            .read()
            .map_err(|_| UserRepositoryError::query(POISONED))?;
        Ok(table
            .records
            .iter()
            .find(|user| user.username().as_ref() == username)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        let table = self
            .table
            .read()
            .map_err(|_| UserRepositoryError::query(POISONED))?;
        Ok(table.records.clone())
    }
}
