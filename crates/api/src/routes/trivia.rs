//! Route definitions for the trivia resources: categories, questions,
//! and the quiz endpoint.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{questions, quizzes};
use crate::state::AppState;

/// Category routes.
///
/// ```text
/// GET /categories                  -> list_categories
/// GET /categories/{id}/questions   -> list_questions_by_category (?page)
/// ```
pub fn categories_router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(questions::list_categories))
        .route(
            "/categories/{id}/questions",
            get(questions::list_questions_by_category),
        )
}

/// Question routes.
///
/// ```text
/// GET    /           -> list_questions (?page)
/// POST   /add        -> add_question
/// POST   /search     -> search_questions
/// DELETE /{id}       -> delete_question
/// ```
pub fn questions_router() -> Router<AppState> {
    Router::new()
        .route("/", get(questions::list_questions))
        .route("/add", post(questions::add_question))
        .route("/search", post(questions::search_questions))
        .route("/{id}", delete(questions::delete_question))
}

/// Quiz route.
///
/// ```text
/// POST /quizzes -> play_quiz
/// ```
pub fn quizzes_router() -> Router<AppState> {
    Router::new().route("/quizzes", post(quizzes::play_quiz))
}
