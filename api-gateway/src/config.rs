//! API gateway configuration.
//!
//! This configures the HTTP listen address and the static-assets root.
//! The underlying store configuration is taken from
//! `cookbook::CookbookConfig::default()`.

use std::net::SocketAddr;

/// Default port used when the `PORT` environment variable is not set.
const DEFAULT_PORT: u16 = 3000;

/// Configuration for the API gateway HTTP server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP server to.
    pub listen_addr: SocketAddr,
    /// Directory served for any path not handled by the API routes.
    pub static_dir: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            // Bind to all interfaces so a container port mapping is
            // reachable from the host.
            listen_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            static_dir: "public".to_string(),
        }
    }
}

impl ApiConfig {
    /// Builds a config from the environment, honoring `PORT` when it is
    /// set to a valid port number. Invalid values are logged and ignored.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(raw) = std::env::var("PORT") {
            match raw.parse::<u16>() {
                Ok(port) => cfg.listen_addr.set_port(port),
                Err(_) => {
                    tracing::warn!("ignoring invalid PORT value: {raw:?}");
                }
            }
        }
        cfg
    }
}
