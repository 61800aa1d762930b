//! Driving port for credential issuance.
//!
//! Inbound adapters call this to exchange a username and password for a
//! signed bearer token without knowing how users or hashes are stored.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, LoginGrant};

/// Domain use-case port for login.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Verify `credentials` and issue a token for the matching user.
    ///
    /// Unknown usernames and wrong passwords fail with the same generic
    /// error so callers cannot tell them apart.
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginGrant, Error>;
}
