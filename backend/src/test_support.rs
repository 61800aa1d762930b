//! In-memory application wiring shared by unit and integration tests.
//!
//! Compiled for `cfg(test)` and behind the `test-support` feature. The stack
//! mirrors the production server but uses cheap Argon2 parameters and a fresh
//! random signing secret per instance.

use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::ports::{
    CredentialHasherError, IdentityResolver, TokenCodec, TokenCodecError,
};
use crate::domain::{AuthService, BlogService, IdentityAssertion, User, UserService};
use crate::inbound::http::api_routes;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::middleware::{ResolveIdentity, Trace};
use crate::outbound::memory::{InMemoryBlogRepository, InMemoryUserRepository};
use crate::outbound::password::Argon2CredentialHasher;
use crate::outbound::token::{JwtTokenCodec, TokenSecret};

/// Fully wired in-memory application with handles on its stores.
pub struct InMemoryStack {
    pub users: Arc<InMemoryUserRepository>,
    pub blogs: Arc<InMemoryBlogRepository>,
    pub tokens: Arc<JwtTokenCodec>,
    pub http_state: HttpState,
    pub resolver: Arc<dyn IdentityResolver>,
    pub health: web::Data<HealthState>,
}

impl InMemoryStack {
    /// Stack issuing non-expiring tokens.
    pub fn new() -> Result<Self, CredentialHasherError> {
        Self::with_token_ttl(None)
    }

    /// Stack issuing tokens that expire after `ttl`.
    pub fn with_token_ttl(ttl: Option<Duration>) -> Result<Self, CredentialHasherError> {
        let users = Arc::new(InMemoryUserRepository::new());
        let blogs = Arc::new(InMemoryBlogRepository::new());
        let hasher = Arc::new(Argon2CredentialHasher::with_params(256, 1, 1)?);
        let tokens = Arc::new(JwtTokenCodec::new(&TokenSecret::generate(), ttl));

        let auth = Arc::new(AuthService::new(users.clone(), hasher.clone(), tokens.clone()));
        let blog_service = Arc::new(BlogService::new(blogs.clone(), users.clone()));
        let user_service = Arc::new(UserService::new(users.clone(), blogs.clone(), hasher));

        let http_state = HttpState {
            login: auth.clone(),
            blogs: blog_service.clone(),
            blogs_query: blog_service,
            users: user_service.clone(),
            users_query: user_service,
        };
        let health = web::Data::new(HealthState::new());
        health.mark_ready();

        Ok(Self {
            users,
            blogs,
            tokens,
            http_state,
            resolver: auth,
            health,
        })
    }

    /// Sign a token for `user` without going through login.
    pub fn token_for(&self, user: &User) -> Result<String, TokenCodecError> {
        self.tokens.issue(&IdentityAssertion::for_user(user))
    }

    /// Build an Actix app shaped like the production server.
    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl actix_web::body::MessageBody + use<>>,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        App::new()
            .app_data(web::Data::new(self.http_state.clone()))
            .app_data(self.health.clone())
            .wrap(Trace)
            .service(
                web::scope("/api")
                    .wrap(ResolveIdentity::new(self.resolver.clone()))
                    .configure(api_routes),
            )
            .service(ready)
            .service(live)
    }
}
