//! In-memory recipe store.
//!
//! This implementation is useful for unit tests and handler-level tests
//! that should not touch the filesystem. It keeps the collection in a
//! plain `Vec` and makes `ensure` a no-op.

use crate::storage::{RecipeStore, StoreError};
use crate::types::Recipe;

/// In-memory implementation of [`RecipeStore`].
#[derive(Default)]
pub struct InMemoryRecipeStore {
    recipes: Vec<Recipe>,
}

impl InMemoryRecipeStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of recipes currently stored.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Returns `true` if no recipes are stored.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl RecipeStore for InMemoryRecipeStore {
    fn ensure(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<Recipe>, StoreError> {
        Ok(self.recipes.clone())
    }

    fn write_all(&mut self, recipes: &[Recipe]) -> Result<(), StoreError> {
        self.recipes = recipes.to_vec();
        Ok(())
    }
}
