// api-gateway/src/main.rs

//! API gateway binary.
//!
//! This binary exposes a small HTTP API on top of the `cookbook` crate:
//!
//! - `GET /health`
//! - `GET /api/recipes`
//! - `POST /api/recipes`
//!
//! It embeds the JSON-file recipe store behind a single mutex, serves any
//! other path from a static `public` directory, allows cross-origin
//! requests from anywhere (a development-mode default), and runs a
//! Prometheus metrics exporter on `/metrics`.

mod config;
mod routes;
mod state;

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use cookbook::{
    CookbookConfig, JsonFileStore, MetricsRegistry, RecipeStore, run_prometheus_http_server,
};
use config::ApiConfig;
use routes::{health, recipes};
use state::{AppState, SharedState};

#[tokio::main]
async fn main() {
    // Basic tracing setup.
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "api_gateway=info,cookbook=info".to_string()),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("fatal error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let api_cfg = ApiConfig::from_env();
    let cookbook_cfg = CookbookConfig::default();

    // ---------------------------
    // Metrics
    // ---------------------------

    let metrics = Arc::new(
        MetricsRegistry::new()
            .map_err(|e| format!("failed to initialise metrics registry: {e}"))?,
    );

    // Metrics exporter.
    if cookbook_cfg.metrics.enabled {
        let metrics_clone = metrics.clone();
        let addr = cookbook_cfg.metrics.listen_addr;
        tokio::spawn(async move {
            if let Err(e) = run_prometheus_http_server(metrics_clone, addr).await {
                tracing::error!("metrics HTTP server error: {e}");
            }
        });
        tracing::info!("metrics exporter listening on http://{}/metrics", addr);
    }

    // ---------------------------
    // Recipe store
    // ---------------------------

    let store = JsonFileStore::new(&cookbook_cfg.storage);
    store.ensure().map_err(|e| {
        format!(
            "failed to initialise recipe store at {}: {e}",
            cookbook_cfg.storage.path
        )
    })?;
    tracing::info!("recipe store ready at {}", cookbook_cfg.storage.path);

    // ---------------------------
    // Shared state
    // ---------------------------

    let app_state: SharedState = Arc::new(AppState {
        store: tokio::sync::Mutex::new(store),
        metrics: metrics.clone(),
    });

    // ---------------------------
    // HTTP router
    // ---------------------------

    // Allow all origins while developing; narrow this for production.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health::health))
        .route(
            "/api/recipes",
            get(recipes::list_recipes).post(recipes::create_recipe),
        )
        .fallback_service(ServeDir::new(&api_cfg.static_dir))
        .layer(cors)
        .with_state(app_state);

    // ---------------------------
    // axum 0.8 server (hyper 1 / tokio 1.48 style)
    // ---------------------------

    tracing::info!("recipe API listening on http://{}", api_cfg.listen_addr);

    let listener = tokio::net::TcpListener::bind(api_cfg.listen_addr)
        .await
        .map_err(|e| format!("failed to bind {}: {e}", api_cfg.listen_addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("API server error: {e}"))?;

    Ok(())
}

/// Waits for Ctrl-C and returns, used for graceful shutdown.
async fn shutdown_signal() {
    // Wait for Ctrl+C
    let _ = signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
