//! Driving port used by the request identity middleware.

use async_trait::async_trait;

use crate::domain::{Error, RequestIdentity};

/// Turns a presented bearer credential into a request identity.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Resolve `token` to the caller it names.
    ///
    /// A token that fails verification yields `Error::invalid_token`. A
    /// verified token naming a user that no longer exists resolves to an
    /// anonymous identity rather than an error.
    async fn resolve(&self, token: &str) -> Result<RequestIdentity, Error>;
}
