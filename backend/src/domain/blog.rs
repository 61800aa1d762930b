//! Blog data model.
//!
//! A blog's `owner` is the source of truth for ownership; the owning user's
//! `blogs` list is an index kept in step by the blog service.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;

/// Validation errors raised while building blog fields from a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlogValidationError {
    MissingTitle,
    MissingAuthor,
    MissingUrl,
}

impl fmt::Display for BlogValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "title missing"),
            Self::MissingAuthor => write!(f, "author missing"),
            Self::MissingUrl => write!(f, "url missing"),
        }
    }
}

impl std::error::Error for BlogValidationError {}

/// Error returned when a blog identifier does not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedBlogId;

impl fmt::Display for MalformedBlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "blog id must be a valid UUID")
    }
}

impl std::error::Error for MalformedBlogId {}

/// Stable blog identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlogId(Uuid);

impl BlogId {
    /// Parse an identifier taken from a path or payload.
    pub fn parse(raw: &str) -> Result<Self, MalformedBlogId> {
        Uuid::parse_str(raw).map(Self).map_err(|_| MalformedBlogId)
    }

    /// Generate a new random [`BlogId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Raw blog payload as submitted by a client.
///
/// Every field is optional so that presence checks produce the field-specific
/// messages callers rely on instead of a generic deserialisation failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogDraft {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u64>,
    pub user: Option<String>,
}

/// Validated mutable fields shared by create and full update.
///
/// ## Invariants
/// - `title`, `author` and `url` are present and non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogFields {
    title: String,
    author: String,
    url: String,
    likes: u64,
}

fn required(value: Option<&String>, missing: BlogValidationError) -> Result<String, BlogValidationError> {
    match value {
        Some(raw) if !raw.trim().is_empty() => Ok(raw.clone()),
        _ => Err(missing),
    }
}

impl BlogFields {
    /// Check presence of the required fields, defaulting `likes` to zero.
    ///
    /// # Examples
    /// ```
    /// use bloglist::domain::{BlogDraft, BlogFields};
    ///
    /// let draft = BlogDraft {
    ///     title: Some("T".into()),
    ///     author: Some("A".into()),
    ///     url: Some("X".into()),
    ///     ..BlogDraft::default()
    /// };
    /// let fields = BlogFields::try_from_draft(&draft).unwrap();
    /// assert_eq!(fields.likes(), 0);
    /// ```
    pub fn try_from_draft(draft: &BlogDraft) -> Result<Self, BlogValidationError> {
        let title = required(draft.title.as_ref(), BlogValidationError::MissingTitle)?;
        let author = required(draft.author.as_ref(), BlogValidationError::MissingAuthor)?;
        let url = required(draft.url.as_ref(), BlogValidationError::MissingUrl)?;
        Ok(Self {
            title,
            author,
            url,
            likes: draft.likes.unwrap_or(0),
        })
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    pub fn likes(&self) -> u64 {
        self.likes
    }
}

/// Blog entry as held by the blog store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    id: BlogId,
    fields: BlogFields,
    owner: UserId,
}

impl Blog {
    /// Build a blog from stored components.
    pub fn new(id: BlogId, fields: BlogFields, owner: UserId) -> Self {
        Self { id, fields, owner }
    }

    pub fn id(&self) -> BlogId {
        self.id
    }

    pub fn title(&self) -> &str {
        self.fields.title()
    }

    pub fn author(&self) -> &str {
        self.fields.author()
    }

    pub fn url(&self) -> &str {
        self.fields.url()
    }

    pub fn likes(&self) -> u64 {
        self.fields.likes()
    }

    /// Identifier of the owning user.
    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    /// Whether `user` is the owner of this blog.
    pub fn is_owned_by(&self, user: &UserId) -> bool {
        &self.owner == user
    }

    /// Full replace of the mutable fields and owner.
    pub fn replaced(&self, fields: BlogFields, owner: UserId) -> Self {
        Self::new(self.id, fields, owner)
    }
}

/// Blog record awaiting insertion; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlog {
    pub fields: BlogFields,
    pub owner: UserId,
}

impl NewBlog {
    /// Materialise the stored blog once the store has chosen an id.
    pub fn into_blog(self, id: BlogId) -> Blog {
        Blog::new(id, self.fields, self.owner)
    }
}
