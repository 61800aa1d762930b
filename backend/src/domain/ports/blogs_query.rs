//! Driving port for blog reads.

use async_trait::async_trait;

use crate::domain::blog_stats::{AuthorBlogCount, AuthorLikes};
use crate::domain::{Blog, Error, UserId, Username};

/// Public projection of a blog's owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerSummary {
    pub id: UserId,
    pub username: Username,
    pub name: Option<String>,
}

/// A blog together with its populated owner.
///
/// `owner` is `None` when the referenced user no longer exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogListing {
    pub blog: Blog,
    pub owner: Option<OwnerSummary>,
}

/// Aggregates computed over every stored blog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogStats {
    pub total_likes: u64,
    pub favorite_blog: Option<Blog>,
    pub most_blogs: Option<AuthorBlogCount>,
    pub most_likes: Option<AuthorLikes>,
}

/// Domain use-case port for listing blogs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogsQuery: Send + Sync {
    /// All blogs with owners populated, in insertion order.
    async fn list(&self) -> Result<Vec<BlogListing>, Error>;

    /// Aggregates over all blogs.
    async fn stats(&self) -> Result<BlogStats, Error>;
}
