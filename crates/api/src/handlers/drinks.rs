//! Handlers for the `/drinks` resource.
//!
//! The public listing exposes the short recipe form; every other
//! operation requires a bearer token carrying the matching permission
//! claim (enforced by the extractors in `middleware::permissions`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use validator::Validate;

use encore_core::drinks::validate_recipe;
use encore_core::error::CoreError;
use encore_core::types::DbId;
use encore_db::models::drink::{CreateDrink, DrinkRepr, UpdateDrink};
use encore_db::repositories::DrinkRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::permissions::{
    CanCreateDrinks, CanDeleteDrinks, CanEditDrinks, CanReadDrinksDetail,
};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response carrying one or more drink representations.
#[derive(Debug, Serialize)]
pub struct DrinksResponse {
    pub success: bool,
    pub drinks: Vec<DrinkRepr>,
}

/// Response for `DELETE /drinks/{id}`.
#[derive(Debug, Serialize)]
pub struct DrinkDeleteResponse {
    pub success: bool,
    pub delete: DbId,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /drinks
///
/// Public menu: every drink in its short representation. An empty menu
/// is a normal empty success.
pub async fn list_drinks(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let drinks = DrinkRepo::list(&state.pool).await?;

    Ok(Json(DrinksResponse {
        success: true,
        drinks: drinks.iter().map(|d| d.short()).collect(),
    }))
}

/// GET /drinks-detail (requires `get:drinks-detail`)
///
/// Every drink in its long representation, ingredient names included.
pub async fn list_drinks_detail(
    CanReadDrinksDetail(_user): CanReadDrinksDetail,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let drinks = DrinkRepo::list(&state.pool).await?;

    Ok(Json(DrinksResponse {
        success: true,
        drinks: drinks.iter().map(|d| d.long()).collect(),
    }))
}

/// POST /drinks (requires `post:drinks`)
///
/// Add a drink to the menu. Title and a well-formed recipe are required.
pub async fn create_drink(
    CanCreateDrinks(user): CanCreateDrinks,
    State(state): State<AppState>,
    Json(input): Json<CreateDrink>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    validate_recipe(&input.recipe).map_err(CoreError::Unprocessable)?;

    let drink = DrinkRepo::create(&state.pool, &input).await?;

    tracing::info!(drink_id = drink.id, subject = %user.subject, "Drink created");

    Ok((
        StatusCode::CREATED,
        Json(DrinksResponse {
            success: true,
            drinks: vec![drink.long()],
        }),
    ))
}

/// PATCH /drinks/{id} (requires `patch:drinks`)
///
/// Partial update: omitted fields keep their current value.
pub async fn update_drink(
    CanEditDrinks(_user): CanEditDrinks,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDrink>,
) -> AppResult<impl IntoResponse> {
    if let Some(recipe) = &input.recipe {
        validate_recipe(recipe).map_err(CoreError::Unprocessable)?;
    }

    let drink = DrinkRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Drink", id })?;

    Ok(Json(DrinksResponse {
        success: true,
        drinks: vec![drink.long()],
    }))
}

/// DELETE /drinks/{id} (requires `delete:drinks`)
///
/// Remove a drink from the menu. 404 if it does not exist.
pub async fn delete_drink(
    CanDeleteDrinks(user): CanDeleteDrinks,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = DrinkRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Drink", id }));
    }

    tracing::info!(drink_id = id, subject = %user.subject, "Drink deleted");

    Ok(Json(DrinkDeleteResponse {
        success: true,
        delete: id,
    }))
}
