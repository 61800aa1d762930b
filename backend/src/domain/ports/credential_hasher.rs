//! Port for one-way password hashing.
use async_trait::async_trait;

use crate::domain::CredentialHash;

use super::define_port_error;

define_port_error! {
    /// Failures raised by credential hasher adapters.
    pub enum CredentialHasherError {
        /// Hashing could not complete.
        Hashing { message: String } => "credential hashing failed: {message}",
        /// A stored hash could not be parsed.
        MalformedHash { message: String } => "stored credential hash is malformed: {message}",
    }
}

/// Salted, slow password hashing with constant-time verification.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    /// Hash `password` with a fresh salt.
    async fn hash(&self, password: &str) -> Result<CredentialHash, CredentialHasherError>;

    /// Whether `password` matches `hash`.
    ///
    /// A mismatch is `Ok(false)`; errors are reserved for unusable hashes.
    async fn verify(
        &self,
        password: &str,
        hash: &CredentialHash,
    ) -> Result<bool, CredentialHasherError>;

    /// A syntactically valid hash matching no real password.
    ///
    /// Login verifies against this when the username is unknown so both
    /// outcomes cost one verification.
    fn dummy_hash(&self) -> CredentialHash;
}
