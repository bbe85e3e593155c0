//! Route definitions for the `/artists` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::artists;
use crate::state::AppState;

/// Artist routes.
///
/// ```text
/// GET    /                   -> list_artists
/// POST   /                   -> create_artist
/// POST   /search             -> search_artists
/// GET    /{id}               -> show_artist
/// PUT    /{id}               -> update_artist
/// DELETE /{id}               -> delete_artist
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(artists::list_artists).post(artists::create_artist))
        .route("/search", post(artists::search_artists))
        .route(
            "/{id}",
            get(artists::show_artist)
                .put(artists::update_artist)
                .delete(artists::delete_artist),
        )
}
