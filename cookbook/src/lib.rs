//! Cookbook library crate.
//!
//! This crate provides the core building blocks for a small recipe
//! service whose entire state lives in one on-disk JSON document:
//!
//! - strongly-typed domain types (`types`),
//! - storage backends for the recipe collection (`storage`),
//! - Prometheus-based metrics (`metrics`),
//! - and a top-level service configuration (`config`).
//!
//! Higher-level binaries (the HTTP gateway) compose these pieces; the
//! library itself knows nothing about HTTP.

pub mod config;
pub mod metrics;
pub mod storage;
pub mod types;

// Re-export top-level configuration types.
pub use config::{CookbookConfig, MetricsConfig};

// Re-export storage backends and the store abstraction.
pub use storage::{
    InMemoryRecipeStore, JsonFileConfig, JsonFileStore, RecipeStore, StoreError,
};

// Re-export metrics registry and the exporter entry point.
pub use metrics::{ApiMetrics, MetricsRegistry, run_prometheus_http_server};

// Re-export domain types at the crate root for convenience.
pub use types::*;

/// Type alias for the default recipe store backend.
///
/// Production deployments use the file-backed store; tests usually swap
/// in [`InMemoryRecipeStore`] instead.
pub type DefaultRecipeStore = JsonFileStore;
