//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::BlogId;

/// Minimum allowed length for a username.
pub const USERNAME_MIN: usize = 3;

/// Validation errors returned by the user constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyId,
    InvalidId,
    MissingUsername,
    UsernameTooShort { min: usize },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
            Self::MissingUsername => write!(f, "username missing"),
            Self::UsernameTooShort { min } => {
                write!(f, "username shorter than {min} characters")
            }
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier stored as a UUID.
///
/// Any spelling `Uuid::parse_str` accepts is normalised to the hyphenated
/// lowercase form, so equality and hashing follow the UUID alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid, String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid, uuid.to_string())
    }

    fn from_owned(id: String) -> Result<Self, UserValidationError> {
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::InvalidId);
        }

        let parsed = Uuid::parse_str(&id).map_err(|_| UserValidationError::InvalidId)?;
        Ok(Self::from_uuid(parsed))
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.1.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        let UserId(_, raw) = value;
        raw
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Login handle, unique across all users.
///
/// ## Invariants
/// - At least [`USERNAME_MIN`] characters long.
///
/// Uniqueness is not checked here; the credential store owns that constraint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    pub fn new(username: impl Into<String>) -> Result<Self, UserValidationError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(UserValidationError::MissingUsername);
        }
        if username.chars().count() < USERNAME_MIN {
            return Err(UserValidationError::UsernameTooShort { min: USERNAME_MIN });
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// One-way credential hash in PHC string format.
///
/// `Debug` output is redacted so hashes never reach logs.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialHash(String);

impl CredentialHash {
    /// Wrap an encoded hash produced by a credential hasher.
    pub fn from_encoded(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded hash string for verification.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for CredentialHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CredentialHash(<redacted>)")
    }
}

/// Application user as held by the credential store.
///
/// ## Invariants
/// - `blogs` lists exactly the blogs whose owner is `id` once any in-flight
///   create/delete has finished both of its writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: Username,
    name: Option<String>,
    credential_hash: CredentialHash,
    blogs: Vec<BlogId>,
}

impl User {
    /// Build a user from stored components.
    pub fn new(
        id: UserId,
        username: Username,
        name: Option<String>,
        credential_hash: CredentialHash,
        blogs: Vec<BlogId>,
    ) -> Self {
        Self {
            id,
            username,
            name,
            credential_hash,
            blogs,
        }
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Unique login handle.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Optional display name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Stored credential hash.
    pub fn credential_hash(&self) -> &CredentialHash {
        &self.credential_hash
    }

    /// Identifiers of the blogs this user owns, in creation order.
    pub fn blogs(&self) -> &[BlogId] {
        &self.blogs
    }

    /// Whether `blog` is listed as owned by this user.
    pub fn owns(&self, blog: &BlogId) -> bool {
        self.blogs.contains(blog)
    }

    /// Record ownership of `blog`; a second link to the same id is ignored.
    pub fn link_blog(&mut self, blog: BlogId) {
        if !self.owns(&blog) {
            self.blogs.push(blog);
        }
    }

    /// Drop `blog` from the owned list, returning whether it was present.
    pub fn unlink_blog(&mut self, blog: &BlogId) -> bool {
        let before = self.blogs.len();
        self.blogs.retain(|owned| owned != blog);
        self.blogs.len() != before
    }
}

/// User record awaiting insertion; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: Username,
    pub name: Option<String>,
    pub credential_hash: CredentialHash,
}

impl NewUser {
    /// Materialise the stored user once the store has chosen an id.
    pub fn into_user(self, id: UserId) -> User {
        let Self {
            username,
            name,
            credential_hash,
        } = self;
        User::new(id, username, name, credential_hash, Vec::new())
    }
}
