//! Handlers for the `/artists` resource.
//!
//! Mirrors the venue handlers: flat listing, substring search, detail
//! with past/upcoming shows, create, partial update, and ordered
//! cascade delete.

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
use encore_db::models::artist::{
    Artist, ArtistListingRow, ArtistSummary, CreateArtist, UpdateArtist,
};
use encore_db::models::show::ArtistShow;
use encore_db::repositories::{ArtistRepo, ShowRepo};

use crate::error::{AppError, AppResult};
use crate::query::SearchTermBody;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response for `GET /artists`.
#[derive(Debug, Serialize)]
pub struct ArtistListResponse {
    pub success: bool,
    pub artists: Vec<ArtistSummary>,
}

/// Response for `POST /artists/search`.
#[derive(Debug, Serialize)]
pub struct ArtistSearchResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<ArtistListingRow>,
}

/// Response for `GET /artists/{id}`: the artist with its show history.
#[derive(Debug, Serialize)]
pub struct ArtistDetail {
    pub success: bool,
    #[serde(flatten)]
    pub artist: Artist,
    pub upcoming_shows: Vec<ArtistShow>,
    pub upcoming_shows_count: usize,
    pub past_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
}

/// Response wrapping a single artist row (create / update).
#[derive(Debug, Serialize)]
pub struct ArtistResponse {
    pub success: bool,
    pub artist: Artist,
}

/// Response for `DELETE /artists/{id}`.
#[derive(Debug, Serialize)]
pub struct ArtistDeleteResponse {
    pub success: bool,
    pub deleted: DbId,
}

/// Validate the parts of a create payload the derive checks cannot cover.
fn validate_create(input: &CreateArtist) -> Result<(), AppError> {
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

/// GET /artists
///
/// Flat listing of all artists.
pub async fn list_artists(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let artists = ArtistRepo::list(&state.pool).await?;

    Ok(Json(ArtistListResponse {
        success: true,
        artists,
    }))
}

/// POST /artists/search
///
/// Case-insensitive substring search on artist name. Zero matches is a
/// normal empty result, not an error.
pub async fn search_artists(
    State(state): State<AppState>,
    Json(body): Json<SearchTermBody>,
) -> AppResult<impl IntoResponse> {
    let data = ArtistRepo::search_by_name(&state.pool, &body.search_term, Utc::now()).await?;

    Ok(Json(ArtistSearchResponse {
        success: true,
        count: data.len(),
        data,
    }))
}

/// GET /artists/{id}
///
/// Artist detail with shows split into past and upcoming around the
/// current instant.
pub async fn show_artist(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let artist = ArtistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Artist",
            id,
        })?;

    let now: Timestamp = Utc::now();
    let upcoming_shows = ShowRepo::upcoming_for_artist(&state.pool, id, now).await?;
    let past_shows = ShowRepo::past_for_artist(&state.pool, id, now).await?;

    Ok(Json(ArtistDetail {
        success: true,
        artist,
        upcoming_shows_count: upcoming_shows.len(),
        upcoming_shows,
        past_shows_count: past_shows.len(),
        past_shows,
    }))
}

/// POST /artists
///
/// Create a new artist listing.
pub async fn create_artist(
    State(state): State<AppState>,
    Json(input): Json<CreateArtist>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input)?;

    let artist = ArtistRepo::create(&state.pool, &input).await?;

    tracing::info!(artist_id = artist.id, name = %artist.name, "Artist listed");

    Ok((
        StatusCode::CREATED,
        Json(ArtistResponse {
            success: true,
            artist,
        }),
    ))
}

/// PUT /artists/{id}
///
/// Partial update: a field only changes when a non-empty replacement is
/// supplied; everything else keeps its current value.
pub async fn update_artist(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateArtist>,
) -> AppResult<impl IntoResponse> {
    if let Some(phone) = input.phone.as_deref().filter(|p| !p.is_empty()) {
        validate_phone(phone).map_err(CoreError::Unprocessable)?;
    }

    let artist = ArtistRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Artist",
            id,
        })?;

    Ok(Json(ArtistResponse {
        success: true,
        artist,
    }))
}

/// DELETE /artists/{id}
///
/// Delete an artist and its dependent shows.
pub async fn delete_artist(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ArtistRepo::delete_with_shows(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Artist",
            id,
        }));
    }

    tracing::info!(artist_id = id, "Artist deleted");

    Ok(Json(ArtistDeleteResponse {
        success: true,
        deleted: id,
    }))
}
