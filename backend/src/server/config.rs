//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

use bloglist::outbound::token::TokenSecret;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) token_secret: TokenSecret,
    pub(crate) token_ttl: Option<Duration>,
}

impl ServerConfig {
    /// Configuration issuing non-expiring tokens.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, token_secret: TokenSecret) -> Self {
        Self {
            bind_addr,
            token_secret,
            token_ttl: None,
        }
    }

    /// Expire issued tokens after `ttl`.
    #[must_use]
    pub fn with_token_ttl(mut self, ttl: Option<Duration>) -> Self {
        self.token_ttl = ttl;
        self
    }
}
