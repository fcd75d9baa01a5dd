use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use cookbook::RecipeStore;

use crate::state::SharedState;

/// Health-check response, including store reachability.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Number of stored recipes; `null` when the store is unreadable.
    pub recipes: Option<usize>,
}

/// `GET /health`
///
/// Returns liveness plus a quick store probe: `"ok"` with the current
/// recipe count when the data file loads, `"degraded"` otherwise.
pub async fn health(State(state): State<SharedState>) -> (StatusCode, Json<HealthResponse>) {
    let store = state.store.lock().await;
    match store.read_all() {
        Ok(recipes) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                recipes: Some(recipes.len()),
            }),
        ),
        Err(e) => {
            tracing::warn!("health probe failed to read store: {e}");
            (
                StatusCode::OK,
                Json(HealthResponse {
                    status: "degraded",
                    recipes: None,
                }),
            )
        }
    }
}
