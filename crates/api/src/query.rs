//! Shared query parameter and request body types for API handlers.
//!
//! Common structs that appear across multiple handler modules are
//! extracted here to avoid duplication.

use serde::Deserialize;

/// Pagination parameter (`?page=`), 1-based. Defaults to the first page.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
}

impl PageParams {
    /// The requested page, defaulting to 1.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }
}

/// Request body for substring-search endpoints.
///
/// The directory endpoints post `search_term` and the trivia endpoint
/// posts `searchTerm`; both spellings land in the same field.
#[derive(Debug, Deserialize)]
pub struct SearchTermBody {
    #[serde(alias = "searchTerm")]
    pub search_term: String,
}
