//! Token signing secret loading and fingerprinting.
//!
//! The secret is read from a file so it never sits in the environment or in
//! configuration files. Release builds refuse short or missing secrets; debug
//! builds (or an explicit toggle) fall back to a random per-process secret,
//! which invalidates every token on restart.

use std::fmt;
use std::path::{Path, PathBuf};

use rand::RngCore;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};
use tracing::warn;
use zeroize::Zeroizing;

/// Minimum secret length in bytes for HS256 signing.
pub const TOKEN_SECRET_MIN_LEN: usize = 32;

/// Length of the fingerprint in bytes before hex encoding.
const FINGERPRINT_BYTES: usize = 8;

/// Build mode for secret validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Debug builds tolerate a missing secret and warn instead.
    Debug,
    /// Release builds require a readable secret of adequate length.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// Errors raised while loading the token secret.
#[derive(thiserror::Error, Debug)]
pub enum TokenSecretError {
    /// Reading the secret file failed.
    #[error("failed to read token secret at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The secret file is shorter than [`TOKEN_SECRET_MIN_LEN`].
    #[error("token secret at {path} too short: need >= {min_len} bytes, got {length}")]
    TooShort {
        path: PathBuf,
        length: usize,
        min_len: usize,
    },
    /// Release builds must not sign with an ephemeral secret.
    #[error("ephemeral token secrets are not allowed in release builds")]
    EphemeralNotAllowed,
}

/// HMAC key material for signing identity assertions.
///
/// The bytes are zeroed on drop and never printed.
#[derive(Clone)]
pub struct TokenSecret(Zeroizing<Vec<u8>>);

impl TokenSecret {
    /// Fresh random secret for a single process lifetime.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = Zeroizing::new(vec![0_u8; TOKEN_SECRET_MIN_LEN]);
        OsRng.fill_bytes(bytes.as_mut_slice());
        Self(bytes)
    }

    /// Wrap caller-supplied bytes, enforcing the minimum length.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, TokenSecretError> {
        let bytes = Zeroizing::new(bytes);
        if bytes.len() < TOKEN_SECRET_MIN_LEN {
            return Err(TokenSecretError::TooShort {
                path: PathBuf::new(),
                length: bytes.len(),
                min_len: TOKEN_SECRET_MIN_LEN,
            });
        }
        Ok(Self(bytes))
    }

    /// Truncated SHA-256 of the secret as 16 lowercase hex characters.
    ///
    /// Safe to log; lets operators tell which secret is active.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.0.as_slice());
        hex::encode(digest.get(..FINGERPRINT_BYTES).unwrap_or_default())
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl fmt::Debug for TokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenSecret({})", self.fingerprint())
    }
}

/// Load the signing secret from `path`.
///
/// # Examples
///
/// ```rust
/// use bloglist::outbound::token::{BuildMode, load_token_secret};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let path = std::env::temp_dir().join("token_secret_example");
/// std::fs::write(&path, vec![b'k'; 32])?;
///
/// let secret = load_token_secret(Some(&path), BuildMode::Release, false)?;
/// assert_eq!(secret.fingerprint().len(), 16);
///
/// std::fs::remove_file(&path)?;
/// # Ok(())
/// # }
/// ```
pub fn load_token_secret(
    path: Option<&Path>,
    mode: BuildMode,
    allow_ephemeral: bool,
) -> Result<TokenSecret, TokenSecretError> {
    if allow_ephemeral && !mode.is_debug() {
        return Err(TokenSecretError::EphemeralNotAllowed);
    }

    let Some(path) = path else {
        return ephemeral_or(mode, allow_ephemeral, || {
            warn!("no token secret file configured; using temporary secret (dev only)");
        })
        .ok_or(TokenSecretError::EphemeralNotAllowed);
    };

    match std::fs::read(path) {
        Ok(bytes) => {
            let bytes = Zeroizing::new(bytes);
            let length = bytes.len();
            if length < TOKEN_SECRET_MIN_LEN {
                return Err(TokenSecretError::TooShort {
                    path: path.to_path_buf(),
                    length,
                    min_len: TOKEN_SECRET_MIN_LEN,
                });
            }
            Ok(TokenSecret(bytes))
        }
        Err(source) => ephemeral_or(mode, allow_ephemeral, || {
            warn!(
                path = %path.display(),
                error = %source,
                "using temporary token secret (dev only)"
            );
        })
        .ok_or_else(|| TokenSecretError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn ephemeral_or(mode: BuildMode, allow_ephemeral: bool, announce: impl FnOnce()) -> Option<TokenSecret> {
    (mode.is_debug() || allow_ephemeral).then(|| {
        announce();
        TokenSecret::generate()
    })
}
