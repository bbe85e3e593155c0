//! Repository for the `drinks` table.

use sqlx::types::Json;
use sqlx::PgPool;

use encore_core::types::DbId;

use crate::models::drink::{CreateDrink, Drink, UpdateDrink};

/// Column list for drinks queries.
const COLUMNS: &str = "id, title, recipe";

/// Provides CRUD operations for drinks.
pub struct DrinkRepo;

impl DrinkRepo {
    /// List all drinks, ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Drink>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM drinks ORDER BY id ASC");
        sqlx::query_as::<_, Drink>(&query).fetch_all(pool).await
    }

    /// Find a drink by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Drink>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM drinks WHERE id = $1");
        sqlx::query_as::<_, Drink>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new drink, returning the created row.
    ///
    /// The `uq_drinks_title` constraint rejects duplicate titles.
    pub async fn create(pool: &PgPool, input: &CreateDrink) -> Result<Drink, sqlx::Error> {
        let query = format!(
            "INSERT INTO drinks (title, recipe) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Drink>(&query)
            .bind(&input.title)
            .bind(Json(&input.recipe))
            .fetch_one(pool)
            .await
    }

    /// Partially update a drink, returning the updated row. The title
    /// only changes when a non-empty replacement is supplied; an omitted
    /// recipe keeps its current value.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDrink,
    ) -> Result<Option<Drink>, sqlx::Error> {
        let recipe = input.recipe.as_ref().map(Json);

        let query = format!(
            "UPDATE drinks SET
                title = COALESCE(NULLIF($2, ''), title),
                recipe = COALESCE($3, recipe)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Drink>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(recipe)
            .fetch_optional(pool)
            .await
    }

    /// Delete a drink by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM drinks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
