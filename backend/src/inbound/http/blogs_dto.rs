//! Request and response payloads for the blog endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::blog_stats::{AuthorBlogCount, AuthorLikes};
use crate::domain::ports::{BlogListing, BlogStats, OwnerSummary};
use crate::domain::{Blog, BlogDraft};

/// Body of `POST /api/blogs` and `PUT /api/blogs/{id}`.
///
/// Every field is optional at the JSON level so missing fields produce the
/// field-specific validation message rather than a parse error.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogRequest {
    #[schema(example = "Type wars")]
    pub title: Option<String>,
    #[schema(example = "Robert C. Martin")]
    pub author: Option<String>,
    #[schema(example = "http://blog.cleancoder.com/uncle-bob/2016/05/01/TypeWars.html")]
    pub url: Option<String>,
    /// Defaults to 0 when omitted.
    #[schema(minimum = 0)]
    pub likes: Option<u64>,
    /// New owner id; honoured by updates only.
    pub user: Option<String>,
}

impl From<BlogRequest> for BlogDraft {
    fn from(value: BlogRequest) -> Self {
        Self {
            title: value.title,
            author: value.author,
            url: value.url,
            likes: value.likes,
            user: value.user,
        }
    }
}

/// Blog as returned by mutations; `user` is the owner id.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: u64,
    #[schema(example = "5b1e4b5c-8a3c-4a59-9c43-6a0d2f3c1f00")]
    pub user: String,
}

impl From<&Blog> for BlogResponse {
    fn from(blog: &Blog) -> Self {
        Self {
            id: blog.id().to_string(),
            title: blog.title().to_owned(),
            author: blog.author().to_owned(),
            url: blog.url().to_owned(),
            likes: blog.likes(),
            user: blog.owner().to_string(),
        }
    }
}

/// Owner fields populated into blog listings.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerResponse {
    pub id: String,
    pub username: String,
    pub name: Option<String>,
}

impl From<OwnerSummary> for OwnerResponse {
    fn from(owner: OwnerSummary) -> Self {
        Self {
            id: owner.id.to_string(),
            username: owner.username.to_string(),
            name: owner.name,
        }
    }
}

/// Blog as returned by `GET /api/blogs`, with the owner populated.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogListItem {
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: u64,
    /// `null` when the owning user no longer exists.
    pub user: Option<OwnerResponse>,
}

impl From<BlogListing> for BlogListItem {
    fn from(listing: BlogListing) -> Self {
        let BlogListing { blog, owner } = listing;
        Self {
            id: blog.id().to_string(),
            title: blog.title().to_owned(),
            author: blog.author().to_owned(),
            url: blog.url().to_owned(),
            likes: blog.likes(),
            user: owner.map(OwnerResponse::from),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorBlogsResponse {
    pub author: String,
    pub blogs: u64,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorLikesResponse {
    pub author: String,
    pub likes: u64,
}

/// Aggregates over every stored blog.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogStatsResponse {
    pub total_likes: u64,
    pub favorite_blog: Option<BlogResponse>,
    pub most_blogs: Option<AuthorBlogsResponse>,
    pub most_likes: Option<AuthorLikesResponse>,
}

impl From<BlogStats> for BlogStatsResponse {
    fn from(stats: BlogStats) -> Self {
        Self {
            total_likes: stats.total_likes,
            favorite_blog: stats.favorite_blog.as_ref().map(BlogResponse::from),
            most_blogs: stats
                .most_blogs
                .map(|AuthorBlogCount { author, blogs }| AuthorBlogsResponse { author, blogs }),
            most_likes: stats
                .most_likes
                .map(|AuthorLikes { author, likes }| AuthorLikesResponse { author, likes }),
        }
    }
}
