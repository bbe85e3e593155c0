//! Drink model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use encore_core::drinks::{short_recipe, RecipePart};
use encore_core::types::DbId;

/// A row from the `drinks` table. The recipe is stored as JSONB.
#[derive(Debug, Clone, FromRow)]
pub struct Drink {
    pub id: DbId,
    pub title: String,
    pub recipe: Json<Vec<RecipePart>>,
}

/// Serializable representation of a drink at either detail level.
#[derive(Debug, Clone, Serialize)]
pub struct DrinkRepr {
    pub id: DbId,
    pub title: String,
    pub recipe: Vec<RecipePart>,
}

impl Drink {
    /// Full representation including ingredient names.
    pub fn long(&self) -> DrinkRepr {
        DrinkRepr {
            id: self.id,
            title: self.title.clone(),
            recipe: self.recipe.0.clone(),
        }
    }

    /// Public representation with ingredient names stripped.
    pub fn short(&self) -> DrinkRepr {
        DrinkRepr {
            id: self.id,
            title: self.title.clone(),
            recipe: short_recipe(&self.recipe.0),
        }
    }
}

/// DTO for creating a new drink.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDrink {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub recipe: Vec<RecipePart>,
}

/// DTO for partially updating a drink. Omitted fields keep their
/// current value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateDrink {
    pub title: Option<String>,
    pub recipe: Option<Vec<RecipePart>>,
}
