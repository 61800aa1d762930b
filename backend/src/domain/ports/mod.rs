//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, [`TokenCodec`], [`CredentialHasher`]) are
//! implemented by outbound adapters. Driving ports ([`LoginService`],
//! [`IdentityResolver`], `Blogs*`, `Users*`) are implemented by domain
//! services and called by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod blog_repository;
mod blogs_command;
mod blogs_query;
mod credential_hasher;
mod identity_resolver;
mod login_service;
mod token_codec;
mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use blog_repository::MockBlogRepository;
pub use blog_repository::{BlogRepository, BlogRepositoryError};
#[cfg(test)]
pub use blogs_command::MockBlogsCommand;
pub use blogs_command::BlogsCommand;
#[cfg(test)]
pub use blogs_query::MockBlogsQuery;
pub use blogs_query::{BlogListing, BlogStats, BlogsQuery, OwnerSummary};
#[cfg(test)]
pub use credential_hasher::MockCredentialHasher;
pub use credential_hasher::{CredentialHasher, CredentialHasherError};
#[cfg(test)]
pub use identity_resolver::MockIdentityResolver;
pub use identity_resolver::IdentityResolver;
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use token_codec::MockTokenCodec;
pub use token_codec::{TokenCodec, TokenCodecError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::UsersCommand;
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::{UserListing, UsersQuery};
