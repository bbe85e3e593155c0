//! Route definitions for the minimal `/users` resource.

use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// User routes.
///
/// ```text
/// POST   /           -> create_user
/// DELETE /{id}       -> delete_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(users::create_user))
        .route("/{id}", delete(users::delete_user))
}
