pub mod artists;
pub mod drinks;
pub mod health;
pub mod shows;
pub mod trivia;
pub mod users;
pub mod venues;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the flat route tree, mirroring the original HTTP surface.
///
/// Route hierarchy:
///
/// ```text
/// /                                 home feed (recent venues + artists)
///
/// /venues                           browse (grouped by city/state), create
/// /venues/search                    substring search (POST)
/// /venues/{id}                      detail, update, delete
///
/// /artists                          list, create
/// /artists/search                   substring search (POST)
/// /artists/{id}                     detail, update, delete
///
/// /shows                            list, create
///
/// /tags/search                      genre search across artists + venues (POST)
/// /search                           "City, ST" search across artists + venues (POST)
///
/// /categories                       list categories
/// /categories/{id}/questions        per-category question page (?page)
/// /questions                        question page (?page)
/// /questions/add                    create question (POST)
/// /questions/search                 substring search (POST)
/// /questions/{id}                   delete question (DELETE)
/// /quizzes                          next quiz question (POST)
///
/// /drinks                           public menu, create (post:drinks)
/// /drinks-detail                    detail menu (get:drinks-detail)
/// /drinks/{id}                      update (patch:drinks), delete (delete:drinks)
///
/// /users                            create user (POST)
/// /users/{id}                       delete user (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Home feed.
        .route("/", get(handlers::home::index))
        // Venue/artist/show directory.
        .nest("/venues", venues::router())
        .nest("/artists", artists::router())
        .nest("/shows", shows::router())
        // Cross-entity searches.
        .route("/tags/search", post(handlers::search::search_tags))
        .route("/search", post(handlers::search::search_location))
        // Trivia categories, questions, quizzes.
        .merge(trivia::categories_router())
        .nest("/questions", trivia::questions_router())
        .merge(trivia::quizzes_router())
        // Drinks menu.
        .merge(drinks::router())
        // Minimal user management.
        .nest("/users", users::router())
}
