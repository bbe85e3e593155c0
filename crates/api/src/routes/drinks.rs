//! Route definitions for the `/drinks` resource.
//!
//! Only the plain listing is public; every other route requires the
//! matching permission claim, enforced by extractors on the handlers.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::drinks;
use crate::state::AppState;

/// Drink routes.
///
/// ```text
/// GET    /drinks             -> list_drinks (public, short recipes)
/// POST   /drinks             -> create_drink (post:drinks)
/// GET    /drinks-detail      -> list_drinks_detail (get:drinks-detail)
/// PATCH  /drinks/{id}        -> update_drink (patch:drinks)
/// DELETE /drinks/{id}        -> delete_drink (delete:drinks)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/drinks",
            get(drinks::list_drinks).post(drinks::create_drink),
        )
        .route("/drinks-detail", get(drinks::list_drinks_detail))
        .route(
            "/drinks/{id}",
            patch(drinks::update_drink).delete(drinks::delete_drink),
        )
}
