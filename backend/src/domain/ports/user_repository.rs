//! Port abstraction for the credential store and its errors.
use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// The store's unique index on usernames rejected the insert.
        DuplicateUsername { username: String } => "username already taken: {username}",
        /// An update targeted a user that is not stored.
        Missing { id: String } => "user not stored: {id}",
    }
}

/// Document store for user records.
///
/// Adapters must enforce username uniqueness atomically as part of
/// [`UserRepository::insert`]; callers never pre-check for duplicates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user, assigning its identifier.
    async fn insert(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    /// Overwrite an existing user record.
    async fn update(&self, user: &User) -> Result<(), UserRepositoryError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Fetch a user by exact username.
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, UserRepositoryError>;

    /// Every stored user in insertion order.
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError>;
}
