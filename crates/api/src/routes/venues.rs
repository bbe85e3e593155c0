//! Route definitions for the `/venues` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::venues;
use crate::state::AppState;

/// Venue routes.
///
/// ```text
/// GET    /                   -> browse_venues (grouped by city/state)
/// POST   /                   -> create_venue
/// POST   /search             -> search_venues
/// GET    /{id}               -> show_venue
/// PUT    /{id}               -> update_venue
/// DELETE /{id}               -> delete_venue
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(venues::browse_venues).post(venues::create_venue))
        .route("/search", post(venues::search_venues))
        .route(
            "/{id}",
            get(venues::show_venue)
                .put(venues::update_venue)
                .delete(venues::delete_venue),
        )
}
