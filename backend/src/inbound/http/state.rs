//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{BlogsCommand, BlogsQuery, LoginService, UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use bloglist::domain::{AuthService, BlogService, UserService};
/// use bloglist::inbound::http::state::HttpState;
/// use bloglist::outbound::memory::{InMemoryBlogRepository, InMemoryUserRepository};
/// use bloglist::outbound::password::Argon2CredentialHasher;
/// use bloglist::outbound::token::{JwtTokenCodec, TokenSecret};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let users = Arc::new(InMemoryUserRepository::new());
/// let blogs = Arc::new(InMemoryBlogRepository::new());
/// let hasher = Arc::new(Argon2CredentialHasher::with_params(256, 1, 1)?);
/// let tokens = Arc::new(JwtTokenCodec::new(&TokenSecret::generate(), None));
///
/// let blog_service = Arc::new(BlogService::new(blogs.clone(), users.clone()));
/// let user_service = Arc::new(UserService::new(users.clone(), blogs, hasher.clone()));
/// let state = HttpState {
///     login: Arc::new(AuthService::new(users, hasher, tokens)),
///     blogs: blog_service.clone(),
///     blogs_query: blog_service,
///     users: user_service.clone(),
///     users_query: user_service,
/// };
/// let _login = state.login.clone();
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub blogs: Arc<dyn BlogsCommand>,
    pub blogs_query: Arc<dyn BlogsQuery>,
    pub users: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
}
