//! Route definitions for the `/shows` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::shows;
use crate::state::AppState;

/// Show routes.
///
/// ```text
/// GET    /                   -> list_shows
/// POST   /                   -> create_show
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(shows::list_shows).post(shows::create_show))
}
