//! HTTP server settings loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Listener and logging settings for the server binary.
///
/// Values come from CLI flags, `WORKOUTS_*` environment variables or a
/// configuration file, with accessor defaults for anything left unset.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "WORKOUTS")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Emit JSON log lines instead of human-readable output.
    pub json_logs: Option<bool>,
}

impl ServerSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to 8080.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Whether logs are written as JSON; on unless disabled.
    pub fn json_logs(&self) -> bool {
        self.json_logs.unwrap_or(true)
    }

    /// Host and port pair accepted by `HttpServer::bind`.
    pub fn bind_addr(&self) -> (String, u16) {
        (self.host().to_owned(), self.port())
    }
}
