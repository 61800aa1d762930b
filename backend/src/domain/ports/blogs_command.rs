//! Driving port for blog mutations.
//!
//! Every mutation that needs a caller receives the resolved
//! [`RequestIdentity`] explicitly; raw path identifiers are passed through
//! unparsed so the service controls the order of validation steps.

use async_trait::async_trait;

use crate::domain::{Blog, BlogDraft, Error, RequestIdentity};

/// Domain use-case port for creating, replacing and deleting blogs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogsCommand: Send + Sync {
    /// Create a blog owned by the caller and link it to the caller's list.
    async fn create(&self, identity: &RequestIdentity, draft: BlogDraft) -> Result<Blog, Error>;

    /// Fully replace the blog identified by `id`.
    async fn update(&self, id: &str, draft: BlogDraft) -> Result<Blog, Error>;

    /// Delete the blog identified by `id` if the caller owns it.
    ///
    /// Deleting a blog that does not exist succeeds without side effects.
    async fn delete(&self, identity: &RequestIdentity, id: &str) -> Result<(), Error>;
}
