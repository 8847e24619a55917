//! Backend entry-point: loads settings, installs logging and serves the
//! workout REST API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerSettings, create_server};
use workouts_backend::inbound::http::health::HealthState;

fn init_tracing(json_logs: bool) {
    let builder = fmt().with_env_filter(EnvFilter::from_default_env());
    let result = if json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = ServerSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    init_tracing(settings.json_logs());

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, &settings)?;
    server.await
}
