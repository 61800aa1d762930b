//! Driving port for user-facing queries.

use async_trait::async_trait;

use crate::domain::{Blog, Error, User};

/// A user together with the blogs it owns, in the order they were linked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserListing {
    pub user: User,
    pub blogs: Vec<Blog>,
}

/// Domain use-case port for listing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Every user with owned blogs populated.
    async fn list(&self) -> Result<Vec<UserListing>, Error>;
}
