//! Storage backends for the recipe collection.
//!
//! This module defines the [`RecipeStore`] abstraction and provides
//! concrete implementations:
//!
//! - an in-memory store ([`mem::InMemoryRecipeStore`]) suitable for tests,
//! - a JSON-file-backed store ([`json_file::JsonFileStore`]) that persists
//!   the whole collection as one pretty-printed JSON array on disk.

use std::fmt;
use std::io;

use crate::types::Recipe;

pub mod json_file;
pub mod mem;

pub use json_file::{JsonFileConfig, JsonFileStore};
pub use mem::InMemoryRecipeStore;

/// Storage-level error type.
///
/// Exactly two kinds are surfaced: a corrupted data file (the persisted
/// content does not deserialize as a recipe array) and everything else as
/// a generic I/O failure. Callers branch on the kind to pick an
/// appropriate client-facing message.
#[derive(Debug)]
pub enum StoreError {
    /// The persisted file's content is not a valid JSON recipe array.
    Corrupted(serde_json::Error),
    /// Underlying filesystem failure (permissions, missing directory,
    /// disk errors).
    Io(io::Error),
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Corrupted(e) => write!(f, "recipes file is corrupted: {e}"),
            StoreError::Io(e) => write!(f, "storage I/O error: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Corrupted(e) => Some(e),
            StoreError::Io(e) => Some(e),
        }
    }
}

/// Abstract storage interface for the recipe collection.
///
/// Implementations can be backed by a flat file, memory, etc. The
/// interface is intentionally small: the service only needs to load the
/// full collection and persist a full replacement, plus an idempotent
/// initialization hook.
pub trait RecipeStore {
    /// Guarantees the backing storage exists and is initialized to an
    /// empty collection if it was missing. Idempotent; never alters an
    /// already-valid collection.
    fn ensure(&self) -> Result<(), StoreError>;

    /// Returns the full ordered collection currently persisted.
    fn read_all(&self) -> Result<Vec<Recipe>, StoreError>;

    /// Replaces the persisted collection with `recipes`.
    fn write_all(&mut self, recipes: &[Recipe]) -> Result<(), StoreError>;
}
