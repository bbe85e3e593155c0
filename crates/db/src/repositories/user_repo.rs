//! Repository for the `users` table.

use sqlx::PgPool;

use encore_core::types::DbId;

use crate::models::user::{CreateUser, User};

/// Provides the minimal user operations: create, lookup, delete.
pub struct UserRepo;

impl UserRepo {
    /// Find a user by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT id, nickname, email FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (nickname, email) VALUES ($1, $2)
             RETURNING id, nickname, email",
        )
        .bind(&input.nickname)
        .bind(&input.email)
        .fetch_one(pool)
        .await
    }

    /// Delete a user by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
