//! Trivia question model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use encore_core::types::DbId;

/// A row from the `questions` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Question {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub category_id: DbId,
    pub difficulty: i32,
}

/// DTO for creating a new question.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestion {
    #[validate(length(min = 1, message = "question text is required"))]
    pub question: String,
    #[validate(length(min = 1, message = "answer is required"))]
    pub answer: String,
    #[serde(alias = "category")]
    pub category_id: DbId,
    #[validate(range(min = 1, max = 5, message = "difficulty must be 1-5"))]
    pub difficulty: i32,
}
