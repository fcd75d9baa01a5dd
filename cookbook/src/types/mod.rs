//! Core domain types used by the recipe service
//!
//! This module defines the `Recipe` record stored on disk, the identifier
//! newtype it is keyed by, and the dual-shape `Ingredients` value. The goal
//! is to avoid "naked" JSON values in public APIs and instead use
//! domain-specific types that encode the accepted shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Difficulty applied when a new recipe does not supply one.
pub const DEFAULT_DIFFICULTY: &str = "medium";

/// Strongly-typed recipe identifier.
///
/// Serialized as a plain JSON string. Identifiers are generated
/// server-side at creation time (UUID v4) and are never client-supplied.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct RecipeId(pub String);

impl RecipeId {
    /// Generates a fresh, unique recipe identifier.
    pub fn generate() -> Self {
        RecipeId(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Ingredients of a recipe, in either of the two accepted JSON shapes.
///
/// Clients may send ingredients as an ordered list of strings or as a
/// single free-form string; both shapes are stored exactly as received.
/// The untagged representation maps a JSON array to [`Ingredients::List`]
/// and a JSON string to [`Ingredients::Text`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ingredients {
    /// Ordered list of ingredient lines.
    List(Vec<String>),
    /// Single free-form ingredients string.
    Text(String),
}

impl Ingredients {
    /// Returns `true` if the ingredients count as missing for validation
    /// purposes: an empty list, or a string that is blank after trimming.
    pub fn is_blank(&self) -> bool {
        match self {
            Ingredients::List(items) => items.is_empty(),
            Ingredients::Text(text) => text.trim().is_empty(),
        }
    }
}

/// A single stored recipe record.
///
/// Field names follow the wire format (`camelCase`), which is also the
/// on-disk format: the data file is a JSON array of these objects.
/// `cook_time` is always serialized, as an explicit `null` when absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Server-generated unique identifier.
    pub id: RecipeId,
    /// Recipe title, trimmed of surrounding whitespace.
    pub title: String,
    /// Ingredients in whichever shape the client supplied.
    pub ingredients: Ingredients,
    /// Preparation instructions, trimmed of surrounding whitespace.
    pub instructions: String,
    /// Optional cook time; any JSON value the client sent, or `null`.
    #[serde(default)]
    pub cook_time: Option<Value>,
    /// Difficulty label; defaults to [`DEFAULT_DIFFICULTY`].
    pub difficulty: String,
    /// RFC 3339 UTC creation timestamp, set once and never modified.
    pub created_at: String,
}

/// Validated payload for a recipe about to be created.
///
/// Handlers build this after validation has passed;
/// [`Recipe::create`] then stamps the identifier and timestamp and
/// applies normalization.
#[derive(Clone, Debug)]
pub struct NewRecipe {
    pub title: String,
    pub ingredients: Ingredients,
    pub instructions: String,
    pub cook_time: Option<Value>,
    pub difficulty: Option<String>,
}

impl Recipe {
    /// Creates a new recipe from a validated payload.
    ///
    /// This:
    ///
    /// - generates a fresh [`RecipeId`],
    /// - trims `title` and `instructions`,
    /// - drops a `null` cook time so it stores as an explicit absent value,
    /// - defaults `difficulty` to [`DEFAULT_DIFFICULTY`] when missing or
    ///   empty,
    /// - stamps `created_at` with the current UTC time.
    pub fn create(new: NewRecipe) -> Self {
        let difficulty = match new.difficulty {
            Some(d) if !d.is_empty() => d,
            _ => DEFAULT_DIFFICULTY.to_string(),
        };

        Recipe {
            id: RecipeId::generate(),
            title: new.title.trim().to_string(),
            ingredients: new.ingredients,
            instructions: new.instructions.trim().to_string(),
            cook_time: new.cook_time.filter(|v| !v.is_null()),
            difficulty,
            created_at: current_timestamp(),
        }
    }
}

/// Returns the current UTC time as an RFC 3339 string with millisecond
/// precision and a `Z` suffix, e.g. `2026-08-21T10:15:30.123Z`.
pub fn current_timestamp() -> String {
    chrono::Utc::now()
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_new_recipe() -> NewRecipe {
        NewRecipe {
            title: "  Pancakes  ".to_string(),
            ingredients: Ingredients::List(vec!["flour".to_string(), "milk".to_string()]),
            instructions: " Mix and fry. ".to_string(),
            cook_time: None,
            difficulty: None,
        }
    }

    #[test]
    fn create_trims_and_applies_defaults() {
        let recipe = Recipe::create(dummy_new_recipe());

        assert_eq!(recipe.title, "Pancakes");
        assert_eq!(recipe.instructions, "Mix and fry.");
        assert_eq!(recipe.difficulty, DEFAULT_DIFFICULTY);
        assert!(recipe.cook_time.is_none());
        assert!(!recipe.id.as_str().is_empty());
    }

    #[test]
    fn create_keeps_supplied_difficulty_but_defaults_empty() {
        let mut new = dummy_new_recipe();
        new.difficulty = Some("hard".to_string());
        assert_eq!(Recipe::create(new).difficulty, "hard");

        let mut new = dummy_new_recipe();
        new.difficulty = Some(String::new());
        assert_eq!(Recipe::create(new).difficulty, DEFAULT_DIFFICULTY);
    }

    #[test]
    fn create_drops_null_cook_time() {
        let mut new = dummy_new_recipe();
        new.cook_time = Some(Value::Null);
        assert!(Recipe::create(new).cook_time.is_none());

        let mut new = dummy_new_recipe();
        new.cook_time = Some(Value::from("30 min"));
        assert_eq!(
            Recipe::create(new).cook_time,
            Some(Value::from("30 min"))
        );
    }

    #[test]
    fn created_at_is_rfc3339_with_z_suffix() {
        let recipe = Recipe::create(dummy_new_recipe());
        assert!(recipe.created_at.ends_with('Z'));
        chrono::DateTime::parse_from_rfc3339(&recipe.created_at)
            .expect("created_at should parse as RFC 3339");
    }

    #[test]
    fn two_created_recipes_have_distinct_ids() {
        let a = Recipe::create(dummy_new_recipe());
        let b = Recipe::create(dummy_new_recipe());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn ingredients_accept_both_json_shapes() {
        let list: Ingredients =
            serde_json::from_str(r#"["eggs", "milk"]"#).expect("array shape should parse");
        assert_eq!(
            list,
            Ingredients::List(vec!["eggs".to_string(), "milk".to_string()])
        );

        let text: Ingredients =
            serde_json::from_str(r#""eggs and milk""#).expect("string shape should parse");
        assert_eq!(text, Ingredients::Text("eggs and milk".to_string()));
    }

    #[test]
    fn ingredients_blank_checks_per_shape() {
        assert!(Ingredients::List(vec![]).is_blank());
        assert!(Ingredients::Text("   ".to_string()).is_blank());
        assert!(!Ingredients::List(vec!["salt".to_string()]).is_blank());
        assert!(!Ingredients::Text("salt".to_string()).is_blank());
    }

    #[test]
    fn recipe_serializes_in_wire_format() {
        let mut new = dummy_new_recipe();
        new.cook_time = None;
        let recipe = Recipe::create(new);

        let json = serde_json::to_value(&recipe).expect("serialize recipe");
        let obj = json.as_object().expect("recipe should be an object");

        assert!(obj.contains_key("createdAt"));
        // cookTime is present as an explicit null, never omitted.
        assert_eq!(obj.get("cookTime"), Some(&Value::Null));
    }
}
