//! Handlers for the `/venues` resource.
//!
//! Browse is grouped by (city, state); search is a case-insensitive
//! substring match on the venue name. Deleting a venue removes its
//! dependent shows first, inside one transaction.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use validator::Validate;

use encore_core::directory::{validate_genres, validate_phone};
use encore_core::error::CoreError;
use encore_core::types::{DbId, Timestamp};
use encore_db::models::show::VenueShow;
use encore_db::models::venue::{CreateVenue, UpdateVenue, Venue, VenueListingRow};
use encore_db::repositories::{ShowRepo, VenueRepo};

use crate::error::{AppError, AppResult};
use crate::query::SearchTermBody;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// One (city, state) group in the browse listing.
#[derive(Debug, Serialize)]
pub struct CityArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<AreaVenue>,
}

/// A venue within a [`CityArea`].
#[derive(Debug, Serialize)]
pub struct AreaVenue {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Response for `GET /venues`.
#[derive(Debug, Serialize)]
pub struct VenueBrowseResponse {
    pub success: bool,
    pub areas: Vec<CityArea>,
}

/// Response for `POST /venues/search`.
#[derive(Debug, Serialize)]
pub struct VenueSearchResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<VenueListingRow>,
}

/// Response for `GET /venues/{id}`: the venue with its show history.
#[derive(Debug, Serialize)]
pub struct VenueDetail {
    pub success: bool,
    #[serde(flatten)]
    pub venue: Venue,
    pub upcoming_shows: Vec<VenueShow>,
    pub upcoming_shows_count: usize,
    pub past_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
}

/// Response wrapping a single venue row (create / update).
#[derive(Debug, Serialize)]
pub struct VenueResponse {
    pub success: bool,
    pub venue: Venue,
}

/// Response for `DELETE /venues/{id}`.
#[derive(Debug, Serialize)]
pub struct VenueDeleteResponse {
    pub success: bool,
    pub deleted: DbId,
}

/// Group listing rows (ordered by city, state) into city areas.
fn group_by_area(rows: Vec<VenueListingRow>) -> Vec<CityArea> {
    let mut areas: Vec<CityArea> = Vec::new();
    for row in rows {
        let venue = AreaVenue {
            id: row.id,
            name: row.name,
            num_upcoming_shows: row.num_upcoming_shows,
        };
        let same_area = areas
            .last()
            .is_some_and(|a| a.city == row.city && a.state == row.state);
        if same_area {
            if let Some(area) = areas.last_mut() {
                area.venues.push(venue);
            }
        } else {
            areas.push(CityArea {
                city: row.city,
                state: row.state,
                venues: vec![venue],
            });
        }
    }
    areas
}

/// Validate the parts of a create payload the derive checks cannot cover.
fn validate_create(input: &CreateVenue) -> Result<(), AppError> {
    input.validate()?;
    validate_genres(&input.genres).map_err(CoreError::Unprocessable)?;
    if let Some(phone) = input.phone.as_deref().filter(|p| !p.is_empty()) {
        validate_phone(phone).map_err(CoreError::Unprocessable)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /venues
///
/// Browse all venues grouped by (city, state).
pub async fn browse_venues(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let now: Timestamp = Utc::now();
    let rows = VenueRepo::list_with_upcoming_counts(&state.pool, now).await?;

    Ok(Json(VenueBrowseResponse {
        success: true,
        areas: group_by_area(rows),
    }))
}

/// POST /venues/search
///
/// Case-insensitive substring search on venue name. Zero matches is a
/// normal empty result, not an error.
pub async fn search_venues(
    State(state): State<AppState>,
    Json(body): Json<SearchTermBody>,
) -> AppResult<impl IntoResponse> {
    let data = VenueRepo::search_by_name(&state.pool, &body.search_term, Utc::now()).await?;

    Ok(Json(VenueSearchResponse {
        success: true,
        count: data.len(),
        data,
    }))
}

/// GET /venues/{id}
///
/// Venue detail with its shows split into past and upcoming around the
/// current instant.
pub async fn show_venue(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let venue = VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Venue", id })?;

    let now: Timestamp = Utc::now();
    let upcoming_shows = ShowRepo::upcoming_for_venue(&state.pool, id, now).await?;
    let past_shows = ShowRepo::past_for_venue(&state.pool, id, now).await?;

    Ok(Json(VenueDetail {
        success: true,
        venue,
        upcoming_shows_count: upcoming_shows.len(),
        upcoming_shows,
        past_shows_count: past_shows.len(),
        past_shows,
    }))
}

/// POST /venues
///
/// Create a new venue listing.
pub async fn create_venue(
    State(state): State<AppState>,
    Json(input): Json<CreateVenue>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input)?;

    let venue = VenueRepo::create(&state.pool, &input).await?;

    tracing::info!(venue_id = venue.id, name = %venue.name, "Venue listed");

    Ok((
        StatusCode::CREATED,
        Json(VenueResponse {
            success: true,
            venue,
        }),
    ))
}

/// PUT /venues/{id}
///
/// Partial update: a field only changes when a non-empty replacement is
/// supplied; everything else keeps its current value.
pub async fn update_venue(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVenue>,
) -> AppResult<impl IntoResponse> {
    if let Some(phone) = input.phone.as_deref().filter(|p| !p.is_empty()) {
        validate_phone(phone).map_err(CoreError::Unprocessable)?;
    }

    let venue = VenueRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Venue", id })?;

    Ok(Json(VenueResponse {
        success: true,
        venue,
    }))
}

/// DELETE /venues/{id}
///
/// Delete a venue and its dependent shows.
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = VenueRepo::delete_with_shows(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Venue", id }));
    }

    tracing::info!(venue_id = id, "Venue deleted");

    Ok(Json(VenueDeleteResponse {
        success: true,
        deleted: id,
    }))
}
