//! Domain primitives, services and ports.
//!
//! Purpose: define strongly typed entities and the use-cases that act on
//! them, independent of HTTP or any particular store.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failure taxonomy.
//! - [`User`], [`Blog`] and their identifiers and validated inputs.
//! - [`RequestIdentity`]: the caller resolved for a single request.
//! - Services implementing the driving ports in [`ports`].
//! - [`blog_stats`]: pure aggregations over blog slices.

pub mod auth;
pub mod blog;
pub mod blog_stats;
pub mod error;
pub mod identity;
pub mod ports;
pub mod user;

mod auth_service;
mod blog_service;
mod repository_errors;
mod user_service;

pub use self::auth::{
    LoginCredentials, LoginGrant, LoginValidationError, PASSWORD_MIN, Registration,
    RegistrationValidationError,
};
pub use self::auth_service::AuthService;
pub use self::blog::{Blog, BlogDraft, BlogFields, BlogId, BlogValidationError, MalformedBlogId, NewBlog};
pub use self::blog_service::BlogService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::identity::{IdentityAssertion, RequestIdentity};
pub use self::user::{
    CredentialHash, NewUser, USERNAME_MIN, User, UserId, UserValidationError, Username,
};
pub use self::user_service::UserService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use bloglist::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::missing_identity())
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
