//! Port for signing and verifying identity assertions.
//!
//! Verification is purely computational, so the trait is synchronous and can
//! be called from middleware without awaiting.

use crate::domain::IdentityAssertion;

use super::define_port_error;

define_port_error! {
    /// Failures raised while issuing or checking a token.
    pub enum TokenCodecError {
        /// The assertion could not be signed.
        Signing { message: String } => "token signing failed: {message}",
        /// Signature, structure or claims did not verify.
        Invalid { message: String } => "token rejected: {message}",
        /// The token carried an expiry that has passed.
        Expired => "token expired",
    }
}

/// Signs identity assertions into compact bearer tokens and back.
#[cfg_attr(test, mockall::automock)]
pub trait TokenCodec: Send + Sync {
    /// Produce a signed token for `assertion`.
    fn issue(&self, assertion: &IdentityAssertion) -> Result<String, TokenCodecError>;

    /// Check the signature of `token` and return the embedded assertion.
    fn verify(&self, token: &str) -> Result<IdentityAssertion, TokenCodecError>;
}
