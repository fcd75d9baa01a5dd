//! Metrics and instrumentation for the recipe service.
//!
//! This module defines Prometheus-compatible metrics for the store and
//! API and exposes a small HTTP exporter that serves `/metrics` in
//! Prometheus text format.
//!
//! Typical usage in the gateway:
//!
//! ```ignore
//! use std::net::SocketAddr;
//! use std::sync::Arc;
//! use cookbook::metrics::{MetricsRegistry, run_prometheus_http_server};
//!
//! let registry = Arc::new(MetricsRegistry::new()?);
//! let addr: SocketAddr = "127.0.0.1:9898".parse()?;
//!
//! // Spawn the HTTP exporter in the background:
//! tokio::spawn(run_prometheus_http_server(registry.clone(), addr));
//!
//! // Elsewhere in the code:
//! registry.api.store_read_seconds.observe(duration_secs);
//! ```

pub mod prometheus;

pub use prometheus::{ApiMetrics, MetricsRegistry, run_prometheus_http_server};
