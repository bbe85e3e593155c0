//! Capability-based authorization extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose token
//! does not carry the required permission claim. Use these in route
//! handlers to enforce authorization at the type level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use encore_core::error::CoreError;
use encore_core::permissions::{DELETE_DRINKS, GET_DRINKS_DETAIL, PATCH_DRINKS, POST_DRINKS};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Reject with 403 Forbidden unless the token carries `permission`.
fn require(user: &AuthUser, permission: &str) -> Result<(), AppError> {
    if user.permissions.iter().any(|p| p == permission) {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Forbidden(format!(
            "Missing required permission '{permission}'"
        ))))
    }
}

/// Requires the `get:drinks-detail` permission.
///
/// ```ignore
/// async fn detail(CanReadDrinksDetail(user): CanReadDrinksDetail) -> AppResult<Json<()>> {
///     // user is guaranteed to hold get:drinks-detail here
///     Ok(Json(()))
/// }
/// ```
pub struct CanReadDrinksDetail(pub AuthUser);

impl FromRequestParts<AppState> for CanReadDrinksDetail {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        require(&user, GET_DRINKS_DETAIL)?;
        Ok(CanReadDrinksDetail(user))
    }
}

/// Requires the `post:drinks` permission.
pub struct CanCreateDrinks(pub AuthUser);

impl FromRequestParts<AppState> for CanCreateDrinks {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        require(&user, POST_DRINKS)?;
        Ok(CanCreateDrinks(user))
    }
}

/// Requires the `patch:drinks` permission.
pub struct CanEditDrinks(pub AuthUser);

impl FromRequestParts<AppState> for CanEditDrinks {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        require(&user, PATCH_DRINKS)?;
        Ok(CanEditDrinks(user))
    }
}

/// Requires the `delete:drinks` permission.
pub struct CanDeleteDrinks(pub AuthUser);

impl FromRequestParts<AppState> for CanDeleteDrinks {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        require(&user, DELETE_DRINKS)?;
        Ok(CanDeleteDrinks(user))
    }
}
