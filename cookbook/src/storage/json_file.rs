//! JSON-file-backed recipe store.
//!
//! This implementation persists the whole recipe collection as a single
//! pretty-printed JSON array in one UTF-8 file:
//!
//! - `ensure` creates the data directory and an empty `[]` file on first use,
//! - `read_all` loads and deserializes the entire file,
//! - `write_all` serializes the full collection and replaces the file via
//!   a sibling temporary file plus rename, so a crash mid-write leaves the
//!   previous contents intact. No fsync is performed.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::storage::{RecipeStore, StoreError};
use crate::types::Recipe;

/// Configuration for [`JsonFileStore`].
#[derive(Clone, Debug)]
pub struct JsonFileConfig {
    /// Filesystem path of the JSON data file.
    pub path: String,
}

impl Default for JsonFileConfig {
    fn default() -> Self {
        Self {
            path: "data/recipes.json".to_string(),
        }
    }
}

/// JSON-file-backed implementation of [`RecipeStore`].
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store over the configured data file path.
    ///
    /// This does not touch the filesystem; the file and its directory are
    /// created lazily by [`RecipeStore::ensure`].
    pub fn new(cfg: &JsonFileConfig) -> Self {
        Self {
            path: PathBuf::from(&cfg.path),
        }
    }

    /// Returns the path of the backing data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Internal helper: serializes the collection as a pretty-printed
    /// JSON array.
    fn encode(recipes: &[Recipe]) -> String {
        // Recipe contains only string-keyed JSON-representable fields, so
        // serialization cannot fail.
        serde_json::to_string_pretty(recipes)
            .expect("recipe collection should always serialize")
    }

    /// Writes `content` to a sibling temporary file and renames it over
    /// the data file.
    fn replace_file(&self, content: &str) -> Result<(), io::Error> {
        let tmp_path = self.path.with_extension("json.tmp");
        {
            let mut tmp = fs::File::create(&tmp_path)?;
            tmp.write_all(content.as_bytes())?;
        }
        fs::rename(&tmp_path, &self.path)
    }
}

impl RecipeStore for JsonFileStore {
    fn ensure(&self) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        // create_new never truncates: an existing file is left untouched.
        match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(mut file) => {
                file.write_all(b"[]")?;
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn read_all(&self) -> Result<Vec<Recipe>, StoreError> {
        self.ensure()?;
        let raw = fs::read_to_string(&self.path)?;
        serde_json::from_str(&raw).map_err(StoreError::Corrupted)
    }

    fn write_all(&mut self, recipes: &[Recipe]) -> Result<(), StoreError> {
        self.ensure()?;
        let content = Self::encode(recipes);
        self.replace_file(&content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Ingredients, NewRecipe};
    use tempfile::TempDir;

    fn dummy_recipe(title: &str) -> Recipe {
        Recipe::create(NewRecipe {
            title: title.to_string(),
            ingredients: Ingredients::Text("salt".to_string()),
            instructions: "season".to_string(),
            cook_time: None,
            difficulty: None,
        })
    }

    fn store_in(tmp: &TempDir) -> JsonFileStore {
        let cfg = JsonFileConfig {
            path: tmp
                .path()
                .join("data/recipes.json")
                .to_string_lossy()
                .to_string(),
        };
        JsonFileStore::new(&cfg)
    }

    #[test]
    fn fresh_store_reads_empty_collection() {
        let tmp = TempDir::new().expect("create temp dir");
        let store = store_in(&tmp);

        let recipes = store.read_all().expect("read fresh store");
        assert!(recipes.is_empty());
        // The data file now exists and holds an empty array.
        let raw = fs::read_to_string(store.path()).expect("data file should exist");
        assert_eq!(raw, "[]");
    }

    #[test]
    fn ensure_is_idempotent_and_never_truncates() {
        let tmp = TempDir::new().expect("create temp dir");
        let mut store = store_in(&tmp);

        store
            .write_all(&[dummy_recipe("Toast")])
            .expect("write one recipe");
        let before = fs::read_to_string(store.path()).expect("read data file");

        store.ensure().expect("ensure once");
        store.ensure().expect("ensure twice");

        let after = fs::read_to_string(store.path()).expect("read data file");
        assert_eq!(before, after);
    }

    #[test]
    fn write_then_read_preserves_insertion_order() {
        let tmp = TempDir::new().expect("create temp dir");
        let mut store = store_in(&tmp);

        let recipes = vec![dummy_recipe("First"), dummy_recipe("Second")];
        store.write_all(&recipes).expect("write recipes");

        let loaded = store.read_all().expect("read recipes back");
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].title, "First");
        assert_eq!(loaded[1].title, "Second");
    }

    #[test]
    fn file_output_is_pretty_printed() {
        let tmp = TempDir::new().expect("create temp dir");
        let mut store = store_in(&tmp);

        store.write_all(&[dummy_recipe("Soup")]).expect("write");
        let raw = fs::read_to_string(store.path()).expect("read data file");

        assert!(raw.contains('\n'));
        assert!(raw.contains("  \"title\": \"Soup\""));
    }

    #[test]
    fn garbage_file_surfaces_as_corrupted() {
        let tmp = TempDir::new().expect("create temp dir");
        let store = store_in(&tmp);

        store.ensure().expect("initialize data file");
        fs::write(store.path(), b"this is not json").expect("corrupt data file");

        match store.read_all() {
            Err(StoreError::Corrupted(_)) => {}
            other => panic!("expected Corrupted, got {other:?}"),
        }
    }

    #[test]
    fn directory_in_place_of_file_surfaces_as_io() {
        let tmp = TempDir::new().expect("create temp dir");
        let store = store_in(&tmp);

        // Occupy the data file path with a directory so the read fails
        // below the JSON layer.
        fs::create_dir_all(store.path()).expect("create dir at data path");

        match store.read_all() {
            Err(StoreError::Io(_)) => {}
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn write_replaces_previous_contents_entirely() {
        let tmp = TempDir::new().expect("create temp dir");
        let mut store = store_in(&tmp);

        store
            .write_all(&[dummy_recipe("Old"), dummy_recipe("Older")])
            .expect("write initial recipes");
        store
            .write_all(&[dummy_recipe("New")])
            .expect("overwrite with one recipe");

        let loaded = store.read_all().expect("read back");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "New");
    }
}
