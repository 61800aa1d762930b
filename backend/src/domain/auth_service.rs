//! Login and per-request identity resolution.
//!
//! This service implements both [`LoginService`] and [`IdentityResolver`]
//! because they share the credential store and the token codec.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use super::ports::{CredentialHasher, IdentityResolver, LoginService, TokenCodec, UserRepository};
use super::repository_errors;
use super::{Error, IdentityAssertion, LoginCredentials, LoginGrant, RequestIdentity};

/// Authentication service backed by a user store, a hasher and a token codec.
#[derive(Clone)]
pub struct AuthService<U, H, T> {
    users: Arc<U>,
    hasher: Arc<H>,
    tokens: Arc<T>,
}

impl<U, H, T> AuthService<U, H, T> {
    /// Create a new service from its collaborators.
    pub fn new(users: Arc<U>, hasher: Arc<H>, tokens: Arc<T>) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }
}

impl<U, H, T> AuthService<U, H, T>
where
    H: CredentialHasher,
{
    /// Burn one verification so unknown usernames take as long as known ones.
    async fn verify_against_dummy(&self, password: &str) {
        let dummy = self.hasher.dummy_hash();
        if let Err(err) = self.hasher.verify(password, &dummy).await {
            debug!(error = %err, "dummy credential verification failed");
        }
    }
}

#[async_trait]
impl<U, H, T> LoginService for AuthService<U, H, T>
where
    U: UserRepository,
    H: CredentialHasher,
    T: TokenCodec,
{
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginGrant, Error> {
        let found = self
            .users
            .find_by_username(credentials.username())
            .await
            .map_err(repository_errors::user_store)?;

        let Some(user) = found else {
            self.verify_against_dummy(credentials.password()).await;
            info!(username = credentials.username(), "login rejected: unknown user");
            return Err(Error::invalid_credentials());
        };

        let matches = self
            .hasher
            .verify(credentials.password(), user.credential_hash())
            .await
            .map_err(repository_errors::hasher)?;
        if !matches {
            info!(user_id = %user.id(), "login rejected: password mismatch");
            return Err(Error::invalid_credentials());
        }

        let token = self
            .tokens
            .issue(&IdentityAssertion::for_user(&user))
            .map_err(repository_errors::token_signing)?;
        info!(user_id = %user.id(), "login succeeded");

        Ok(LoginGrant {
            token,
            username: user.username().clone(),
            name: user.name().map(str::to_owned),
        })
    }
}

#[async_trait]
impl<U, H, T> IdentityResolver for AuthService<U, H, T>
where
    U: UserRepository,
    H: CredentialHasher,
    T: TokenCodec,
{
    async fn resolve(&self, token: &str) -> Result<RequestIdentity, Error> {
        let assertion = self.tokens.verify(token).map_err(|err| {
            debug!(error = %err, "bearer token rejected");
            Error::invalid_token()
        })?;

        let user = self
            .users
            .find_by_id(&assertion.user_id)
            .await
            .map_err(repository_errors::user_store)?;

        Ok(match user {
            Some(user) => RequestIdentity::authenticated(user),
            None => {
                debug!(user_id = %assertion.user_id, "token names an unknown user");
                RequestIdentity::anonymous()
            }
        })
    }
}
