//! Driving port for account registration.

use async_trait::async_trait;

use crate::domain::{Error, Registration, User};

/// Domain use-case port for creating users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Hash the password and store a new user.
    ///
    /// A taken username surfaces as `Error::duplicate_username`.
    async fn register(&self, registration: &Registration) -> Result<User, Error>;
}
