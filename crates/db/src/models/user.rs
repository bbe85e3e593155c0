//! User model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use encore_core::types::DbId;

/// A row from the `users` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: DbId,
    pub nickname: String,
    pub email: String,
}

/// DTO for creating a new user.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "nickname is required"))]
    pub nickname: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
}
