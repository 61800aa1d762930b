//! Port abstraction for the blog store and its errors.
use async_trait::async_trait;

use crate::domain::{Blog, BlogId, NewBlog};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by blog repository adapters.
    pub enum BlogRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "blog repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "blog repository query failed: {message}",
    }
}

/// Document store for blog records.
///
/// Each call is individually atomic; nothing here spans several records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Insert a new blog, assigning its identifier.
    async fn insert(&self, blog: NewBlog) -> Result<Blog, BlogRepositoryError>;

    /// Fetch a blog by identifier.
    async fn find_by_id(&self, id: BlogId) -> Result<Option<Blog>, BlogRepositoryError>;

    /// Replace a stored blog, returning the new record or `None` when absent.
    async fn update(&self, blog: &Blog) -> Result<Option<Blog>, BlogRepositoryError>;

    /// Remove a blog, returning whether a record was deleted.
    async fn delete(&self, id: BlogId) -> Result<bool, BlogRepositoryError>;

    /// Every stored blog in insertion order.
    async fn list(&self) -> Result<Vec<Blog>, BlogRepositoryError>;
}
