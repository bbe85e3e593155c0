//! Handlers for the minimal `/users` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use validator::Validate;

use encore_core::error::CoreError;
use encore_core::types::DbId;
use encore_db::models::user::{CreateUser, User};
use encore_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response wrapping a single user row.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub success: bool,
    pub user: User,
}

/// Response for `DELETE /users/{id}`.
#[derive(Debug, Serialize)]
pub struct UserDeleteResponse {
    pub success: bool,
    pub deleted: DbId,
}

/// POST /users
///
/// Create a user record.
pub async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let user = UserRepo::create(&state.pool, &input).await?;

    tracing::info!(user_id = user.id, nickname = %user.nickname, "User created");

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            success: true,
            user,
        }),
    ))
}

/// DELETE /users/{id}
///
/// Delete a user record. 404 if it does not exist.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = UserRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }

    tracing::info!(user_id = id, "User deleted");

    Ok(Json(UserDeleteResponse {
        success: true,
        deleted: id,
    }))
}
