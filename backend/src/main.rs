//! Backend entry-point: loads configuration, wires stores and serves the
//! photo API.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use photos_backend::inbound::http::credential_config::{
    BuildMode, credential_settings_from_env, fingerprint::secret_fingerprint,
};
use photos_backend::inbound::http::health::HealthState;
use server::{ServerConfig, ServerSettings, create_server};

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

    let settings = ServerSettings::load().map_err(std::io::Error::other)?;
    let bind_addr = settings.bind_addr()?;

    let credentials =
        credential_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
            .map_err(std::io::Error::other)?;
    info!(
        fingerprint = %secret_fingerprint(&credentials.secret),
        ttl_secs = credentials.ttl.as_secs(),
        ephemeral = credentials.ephemeral,
        "credential codec configured"
    );

    let config =
        ServerConfig::new(bind_addr, credentials).with_pool_config(settings.pool_config());
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config).await?;
    info!(%bind_addr, "photo API listening");

    let outcome = server.await;
    health_state.mark_unhealthy();
    outcome
}
