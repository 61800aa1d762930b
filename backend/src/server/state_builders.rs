//! Builders wiring adapters into the services behind the HTTP state.

use std::sync::Arc;

use actix_web::web;

use bloglist::domain::ports::IdentityResolver;
use bloglist::domain::{AuthService, BlogService, UserService};
use bloglist::inbound::http::state::HttpState;
use bloglist::outbound::memory::{InMemoryBlogRepository, InMemoryUserRepository};
use bloglist::outbound::password::Argon2CredentialHasher;
use bloglist::outbound::token::JwtTokenCodec;

use super::ServerConfig;

/// Handler state plus the resolver used by the identity middleware.
pub(crate) struct BuiltState {
    pub(crate) http_state: web::Data<HttpState>,
    pub(crate) resolver: Arc<dyn IdentityResolver>,
}

/// Wire the in-memory stores, Argon2 hasher and JWT codec into services.
///
/// # Errors
/// Returns [`std::io::Error`] if the hasher cannot be initialised.
pub(crate) fn build_http_state(config: &ServerConfig) -> std::io::Result<BuiltState> {
    let users = Arc::new(InMemoryUserRepository::new());
    let blogs = Arc::new(InMemoryBlogRepository::new());
    let hasher = Arc::new(Argon2CredentialHasher::new().map_err(|err| {
        std::io::Error::other(format!("credential hasher initialisation failed: {err}"))
    })?);
    let tokens = Arc::new(JwtTokenCodec::new(&config.token_secret, config.token_ttl));

    let auth = Arc::new(AuthService::new(users.clone(), hasher.clone(), tokens));
    let blog_service = Arc::new(BlogService::new(blogs.clone(), users.clone()));
    let user_service = Arc::new(UserService::new(users, blogs, hasher));

    let http_state = web::Data::new(HttpState {
        login: auth.clone(),
        blogs: blog_service.clone(),
        blogs_query: blog_service,
        users: user_service.clone(),
        users_query: user_service,
    });

    Ok(BuiltState {
        http_state,
        resolver: auth,
    })
}
