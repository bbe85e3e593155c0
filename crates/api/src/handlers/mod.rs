//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `encore_db` and
//! map errors via [`AppError`](crate::error::AppError).

pub mod artists;
pub mod drinks;
pub mod home;
pub mod questions;
pub mod quizzes;
pub mod search;
pub mod shows;
pub mod users;
pub mod venues;

use axum::http::StatusCode;
use axum::response::Response;

use crate::error::envelope;

/// Fallback for unknown routes: the standard 404 envelope.
pub async fn not_found() -> Response {
    envelope(StatusCode::NOT_FOUND, "Resource not found")
}

/// Fallback for known routes hit with the wrong method: the 405 envelope.
pub async fn method_not_allowed() -> Response {
    envelope(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
