//! Fixed-size page arithmetic for paginated listings.
//!
//! Pages are 1-based. A page index below 1 is a validation error; a page
//! past the end of the collection is detected by the caller when the
//! fetched slice comes back empty.

/// Rows returned per page by paginated question listings.
pub const QUESTIONS_PER_PAGE: i64 = 10;

/// Compute the row offset for a 1-based page index.
pub fn page_offset(page: i64, per_page: i64) -> Result<i64, String> {
    if page < 1 {
        return Err(format!("Page index must be >= 1, got {page}"));
    }
    Ok((page - 1) * per_page)
}

/// Whether a fetched page is past the end of the collection.
///
/// An empty slice means the requested page has no rows. Page 1 of an
/// empty collection also counts as out of range, matching the listing
/// endpoints' not-found behaviour.
pub fn page_out_of_range(rows_fetched: usize) -> bool {
    rows_fetched == 0
}
