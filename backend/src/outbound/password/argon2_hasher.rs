//! Argon2id credential hasher.
//!
//! Hashing is CPU- and memory-bound, so every call runs on Tokio's blocking
//! pool rather than on the async workers.

use argon2::{Config, Variant, Version};
use async_trait::async_trait;
use rand::RngCore;
use rand::rngs::OsRng;
use zeroize::Zeroizing;

use crate::domain::CredentialHash;
use crate::domain::ports::{CredentialHasher, CredentialHasherError};

const SALT_LEN: usize = 16;
const HASH_LEN: u32 = 32;

/// Cost parameters applied to every hash.
#[derive(Clone, Copy, Debug)]
struct HashParams {
    memory_kib: u32,
    iterations: u32,
    lanes: u32,
}

impl HashParams {
    fn config(self) -> Config<'static> {
        Config {
            variant: Variant::Argon2id,
            version: Version::Version13,
            mem_cost: self.memory_kib,
            time_cost: self.iterations,
            lanes: self.lanes,
            hash_length: HASH_LEN,
            ..Config::default()
        }
    }
}

/// Hasher producing PHC-format Argon2id strings.
#[derive(Clone, Debug)]
pub struct Argon2CredentialHasher {
    params: HashParams,
    dummy: CredentialHash,
}

impl Argon2CredentialHasher {
    /// Hasher with the OWASP-recommended Argon2id costs (19 MiB, 2 passes).
    pub fn new() -> Result<Self, CredentialHasherError> {
        Self::with_params(19 * 1024, 2, 1)
    }

    /// Hasher with explicit cost parameters.
    ///
    /// Low costs are only appropriate for tests.
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        lanes: u32,
    ) -> Result<Self, CredentialHasherError> {
        let params = HashParams {
            memory_kib,
            iterations,
            lanes,
        };
        let mut filler = Zeroizing::new([0_u8; 32]);
        OsRng.fill_bytes(filler.as_mut_slice());
        let dummy = hash_with(params, filler.as_slice())?;
        Ok(Self { params, dummy })
    }
}

fn hash_with(params: HashParams, password: &[u8]) -> Result<CredentialHash, CredentialHasherError> {
    let mut salt = [0_u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    argon2::hash_encoded(password, &salt, &params.config())
        .map(CredentialHash::from_encoded)
        .map_err(|err| CredentialHasherError::hashing(err.to_string()))
}

fn verify_with(password: &[u8], encoded: &str) -> Result<bool, CredentialHasherError> {
    argon2::verify_encoded(encoded, password)
        .map_err(|err| CredentialHasherError::malformed_hash(err.to_string()))
}

fn join_error(err: tokio::task::JoinError) -> CredentialHasherError {
    CredentialHasherError::hashing(format!("hashing task failed: {err}"))
}

#[async_trait]
impl CredentialHasher for Argon2CredentialHasher {
    async fn hash(&self, password: &str) -> Result<CredentialHash, CredentialHasherError> {
        let params = self.params;
        let password = Zeroizing::new(password.to_owned());
        tokio::task::spawn_blocking(move || hash_with(params, password.as_bytes()))
            .await
            .map_err(join_error)?
    }

    async fn verify(
        &self,
        password: &str,
        hash: &CredentialHash,
    ) -> Result<bool, CredentialHasherError> {
        let password = Zeroizing::new(password.to_owned());
        let encoded = hash.as_str().to_owned();
        tokio::task::spawn_blocking(move || verify_with(password.as_bytes(), &encoded))
            .await
            .map_err(join_error)?
    }

    fn dummy_hash(&self) -> CredentialHash {
        self.dummy.clone()
    }
}
