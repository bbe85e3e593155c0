//! Trivia category model.

use serde::Serialize;
use sqlx::FromRow;

use encore_core::types::DbId;

/// A row from the `categories` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: DbId,
    /// Category label, serialized as `type` to match the API surface.
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}
