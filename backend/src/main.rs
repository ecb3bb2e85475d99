//! Backend entry-point: loads settings, selects the store and serves the API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use scanfood::inbound::http::health::HealthState;
use server::{ServerSettings, create_server};

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

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), &settings).await?;
    info!(bind_addr = %settings.bind_addr(), "scanfood backend listening");

    let result = server.await;
    health_state.mark_unhealthy();
    result
}
