//! Shared application state for the HTTP gateway.

use std::sync::Arc;

use tokio::sync::Mutex;

use cookbook::{DefaultRecipeStore, MetricsRegistry};

/// Shared state held by the API handlers.
///
/// This is wrapped in an [`Arc`] and passed to request handlers via Axum's
/// `State` extractor.
///
/// The store sits behind a single [`Mutex`], so every read-modify-write
/// cycle for a create request is serialized end to end. Two concurrent
/// creates therefore both persist; the lost-update race of an unlocked
/// flat-file store cannot occur.
pub struct AppState {
    /// File-backed recipe store guarding the on-disk JSON document.
    pub store: Mutex<DefaultRecipeStore>,
    /// Metrics registry shared between the store path and the API.
    pub metrics: Arc<MetricsRegistry>,
}

/// Thread-safe alias for `AppState`.
pub type SharedState = Arc<AppState>;
