//! Top-level configuration for the recipe service core.
//!
//! This module aggregates configuration for:
//!
//! - storage (path of the JSON data file),
//! - metrics exporter (enable flag + listen address).
//!
//! The goal is to have a single `CookbookConfig` struct that higher-level
//! binaries (e.g. the HTTP gateway) can construct from defaults or
//! environment variables as needed.

use std::net::SocketAddr;

use crate::storage::JsonFileConfig;

/// Configuration for the Prometheus metrics exporter.
#[derive(Clone, Debug)]
pub struct MetricsConfig {
    /// Whether to run a `/metrics` HTTP exporter.
    pub enabled: bool,
    /// Address to bind the metrics HTTP server to.
    pub listen_addr: SocketAddr,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        // Safe to unwrap: this is a fixed, valid address literal.
        let addr: SocketAddr = "127.0.0.1:9898"
            .parse()
            .expect("hard-coded metrics listen address should parse");
        Self {
            enabled: true,
            listen_addr: addr,
        }
    }
}

/// Top-level configuration for the recipe service core.
///
/// This aggregates the sub-configs needed to wire up the service:
///
/// - persistent storage (`storage`),
/// - Prometheus metrics exporter (`metrics`).
#[derive(Clone, Debug, Default)]
pub struct CookbookConfig {
    pub storage: JsonFileConfig,
    pub metrics: MetricsConfig,
}
