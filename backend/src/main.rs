//! Backend entry-point: loads settings, the token secret and starts the server.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use bloglist::inbound::http::health::HealthState;
use bloglist::outbound::token::{BuildMode, load_token_secret};
use bloglist::settings::AppSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;

    let token_secret = load_token_secret(
        settings.token_secret_file.as_deref(),
        BuildMode::from_debug_assertions(),
        settings.allow_ephemeral_secret,
    )
    .map_err(std::io::Error::other)?;
    info!(
        fingerprint = %token_secret.fingerprint(),
        "token signing secret loaded"
    );

    let config =
        ServerConfig::new(bind_addr, token_secret).with_token_ttl(settings.token_ttl());
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "listening");
    server.await
}
