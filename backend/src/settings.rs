//! Process configuration loaded via OrthoConfig.
//!
//! Values layer from CLI flags, `BLOGLIST_*` environment variables and an
//! optional configuration file.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Listener address used when none is configured.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3003";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Runtime settings for the HTTP server and token signing.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BLOGLIST")]
pub struct AppSettings {
    /// Socket address to listen on, e.g. `127.0.0.1:3003`.
    pub bind_addr: Option<String>,
    /// File holding the token signing secret.
    pub token_secret_file: Option<PathBuf>,
    /// Permit a random per-process secret when the file cannot be read.
    #[ortho_config(default = false)]
    pub allow_ephemeral_secret: bool,
    /// Token lifetime in seconds; tokens never expire when unset or zero.
    pub token_ttl_secs: Option<u64>,
}

impl AppSettings {
    /// Parsed listener address, falling back to [`DEFAULT_BIND_ADDR`].
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse()
            .map_err(|source| SettingsError::InvalidBindAddr {
                value: raw.to_owned(),
                source,
            })
    }

    /// Token lifetime, or `None` for non-expiring tokens.
    pub fn token_ttl(&self) -> Option<Duration> {
        self.token_ttl_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}
