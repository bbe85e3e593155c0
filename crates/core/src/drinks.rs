//! Drink recipe types and validation.
//!
//! A recipe is an ordered list of parts. The public listing exposes the
//! short form (color and proportion only); the detail listing exposes the
//! long form including ingredient names.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One ingredient layer of a drink recipe, as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipePart {
    /// Ingredient name; only present in the long representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Display color for the layer (e.g. `"#8B4513"` or `"brown"`).
    pub color: String,
    /// Relative proportion of the layer; must be at least 1.
    pub parts: i64,
}

impl RecipePart {
    /// The short representation: same layer with the name stripped.
    pub fn short(&self) -> RecipePart {
        RecipePart {
            name: None,
            color: self.color.clone(),
            parts: self.parts,
        }
    }
}

/// Strip every part of a recipe down to its short representation.
pub fn short_recipe(recipe: &[RecipePart]) -> Vec<RecipePart> {
    recipe.iter().map(RecipePart::short).collect()
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a recipe: at least one part, each with a color and a positive
/// proportion.
pub fn validate_recipe(recipe: &[RecipePart]) -> Result<(), String> {
    if recipe.is_empty() {
        return Err("Recipe must contain at least one part".to_string());
    }
    for (i, part) in recipe.iter().enumerate() {
        if part.color.trim().is_empty() {
            return Err(format!("Recipe part {} is missing a color", i + 1));
        }
        if part.parts < 1 {
            return Err(format!(
                "Recipe part {} must have a proportion of at least 1",
                i + 1
            ));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
