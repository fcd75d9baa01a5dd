//! Handlers for the recipe collection endpoints.
//!
//! Two operations exist:
//!
//! - `GET /api/recipes`: load and return the whole collection,
//! - `POST /api/recipes`: validate, append, and persist one new recipe.
//!
//! Every create runs a full read-modify-write cycle against the store
//! while holding the store lock, so concurrent creates cannot lose
//! updates. Validation happens before any storage access.

use std::time::Instant;

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use cookbook::{Ingredients, NewRecipe, Recipe, RecipeStore, StoreError};

use crate::state::SharedState;

/// Client-facing message for a missing or blank title.
pub const MSG_TITLE_REQUIRED: &str = "Title is required and cannot be blank.";
/// Client-facing message for missing or blank ingredients.
pub const MSG_INGREDIENTS_REQUIRED: &str = "Ingredients are required and cannot be blank.";
/// Client-facing message for missing or blank instructions.
pub const MSG_INSTRUCTIONS_REQUIRED: &str = "Instructions are required and cannot be blank.";
/// Client-facing message for a corrupted data file.
pub const MSG_CORRUPTED: &str = "Recipes data is corrupted on the server.";
/// Client-facing message for a failed list operation.
pub const MSG_READ_FAILED: &str = "Failed to read recipes.";
/// Client-facing message for a failed create operation.
pub const MSG_SAVE_FAILED: &str = "Failed to save recipe.";

/// JSON error body returned by every failing route.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

/// Request body for `POST /api/recipes`.
///
/// All fields are optional at the serde level so that presence checks can
/// produce the field-specific validation messages instead of a generic
/// deserialization error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    pub title: Option<String>,
    pub ingredients: Option<Ingredients>,
    pub instructions: Option<String>,
    pub cook_time: Option<Value>,
    pub difficulty: Option<String>,
}

/// Validates a create request, in fixed field order.
///
/// The first failing check wins; the returned message is sent verbatim to
/// the client with status 400.
fn validate(body: CreateRecipeRequest) -> Result<NewRecipe, &'static str> {
    let title = match body.title {
        Some(t) if !t.trim().is_empty() => t,
        _ => return Err(MSG_TITLE_REQUIRED),
    };

    let ingredients = match body.ingredients {
        Some(i) if !i.is_blank() => i,
        _ => return Err(MSG_INGREDIENTS_REQUIRED),
    };

    let instructions = match body.instructions {
        Some(s) if !s.trim().is_empty() => s,
        _ => return Err(MSG_INSTRUCTIONS_REQUIRED),
    };

    Ok(NewRecipe {
        title,
        ingredients,
        instructions,
        cook_time: body.cook_time,
        difficulty: body.difficulty,
    })
}

fn error_response(status: StatusCode, error: &'static str) -> (StatusCode, Json<ErrorResponse>) {
    (status, Json(ErrorResponse { error }))
}

/// `GET /api/recipes`
///
/// Returns the full collection in storage (insertion) order. A corrupted
/// data file maps to the corruption-specific message; any other storage
/// failure maps to the generic read failure.
pub async fn list_recipes(
    State(state): State<SharedState>,
) -> Result<Json<Vec<Recipe>>, (StatusCode, Json<ErrorResponse>)> {
    let store = state.store.lock().await;

    let start = Instant::now();
    let result = store.read_all();
    state
        .metrics
        .api
        .store_read_seconds
        .observe(start.elapsed().as_secs_f64());

    match result {
        Ok(recipes) => {
            state.metrics.api.recipes_in_store.set(recipes.len() as f64);
            Ok(Json(recipes))
        }
        Err(StoreError::Corrupted(e)) => {
            tracing::error!("recipes file is corrupted: {e}");
            Err(error_response(StatusCode::INTERNAL_SERVER_ERROR, MSG_CORRUPTED))
        }
        Err(StoreError::Io(e)) => {
            tracing::error!("failed to read recipes: {e}");
            Err(error_response(StatusCode::INTERNAL_SERVER_ERROR, MSG_READ_FAILED))
        }
    }
}

/// `POST /api/recipes`
///
/// Validates the body, constructs the new recipe (server-generated id and
/// timestamp), and appends it to the collection under the store lock.
pub async fn create_recipe(
    State(state): State<SharedState>,
    Json(body): Json<CreateRecipeRequest>,
) -> Result<(StatusCode, Json<Recipe>), (StatusCode, Json<ErrorResponse>)> {
    let new = match validate(body) {
        Ok(new) => new,
        Err(msg) => {
            state.metrics.api.create_rejected_total.inc();
            return Err(error_response(StatusCode::BAD_REQUEST, msg));
        }
    };

    let mut store = state.store.lock().await;

    let start = Instant::now();
    let read = store.read_all();
    state
        .metrics
        .api
        .store_read_seconds
        .observe(start.elapsed().as_secs_f64());

    let mut recipes = match read {
        Ok(recipes) => recipes,
        Err(StoreError::Corrupted(e)) => {
            tracing::error!("recipes file is corrupted: {e}");
            return Err(error_response(StatusCode::INTERNAL_SERVER_ERROR, MSG_CORRUPTED));
        }
        Err(StoreError::Io(e)) => {
            tracing::error!("failed to load recipes before save: {e}");
            return Err(error_response(StatusCode::INTERNAL_SERVER_ERROR, MSG_SAVE_FAILED));
        }
    };

    let recipe = Recipe::create(new);
    recipes.push(recipe.clone());

    let start = Instant::now();
    let written = store.write_all(&recipes);
    state
        .metrics
        .api
        .store_write_seconds
        .observe(start.elapsed().as_secs_f64());

    if let Err(e) = written {
        tracing::error!("failed to save recipe: {e}");
        return Err(error_response(StatusCode::INTERNAL_SERVER_ERROR, MSG_SAVE_FAILED));
    }

    state.metrics.api.recipes_created_total.inc();
    state.metrics.api.recipes_in_store.set(recipes.len() as f64);

    Ok((StatusCode::CREATED, Json(recipe)))
}
