//! Cross-entity search handlers: genre ("tag") search and location search.
//!
//! Both run the same term against artists and venues and return the two
//! result groups side by side.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use encore_core::directory::parse_location_term;
use encore_core::error::CoreError;
use encore_db::models::artist::{ArtistListingRow, ArtistSummary};
use encore_db::models::venue::{VenueListingRow, VenueSummary};
use encore_db::repositories::{ArtistRepo, VenueRepo};

use crate::error::AppResult;
use crate::query::SearchTermBody;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// One result group (artists or venues) with its count.
#[derive(Debug, Serialize)]
pub struct SearchGroup<T> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> SearchGroup<T> {
    fn new(data: Vec<T>) -> Self {
        SearchGroup {
            count: data.len(),
            data,
        }
    }
}

/// Response for `POST /tags/search`.
#[derive(Debug, Serialize)]
pub struct TagSearchResponse {
    pub success: bool,
    pub artists: SearchGroup<ArtistListingRow>,
    pub venues: SearchGroup<VenueListingRow>,
}

/// Response for `POST /search`.
#[derive(Debug, Serialize)]
pub struct LocationSearchResponse {
    pub success: bool,
    pub artists: SearchGroup<ArtistSummary>,
    pub venues: SearchGroup<VenueSummary>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /tags/search
///
/// Exact genre membership match across artists and venues.
pub async fn search_tags(
    State(state): State<AppState>,
    Json(body): Json<SearchTermBody>,
) -> AppResult<impl IntoResponse> {
    let now = Utc::now();
    let artists = ArtistRepo::search_by_genre(&state.pool, &body.search_term, now).await?;
    let venues = VenueRepo::search_by_genre(&state.pool, &body.search_term, now).await?;

    Ok(Json(TagSearchResponse {
        success: true,
        artists: SearchGroup::new(artists),
        venues: SearchGroup::new(venues),
    }))
}

/// POST /search
///
/// `"City, ST"` location search across artists and venues.
pub async fn search_location(
    State(state): State<AppState>,
    Json(body): Json<SearchTermBody>,
) -> AppResult<impl IntoResponse> {
    let (city, state_part) =
        parse_location_term(&body.search_term).map_err(CoreError::Validation)?;

    let artists = ArtistRepo::search_by_location(&state.pool, &city, &state_part).await?;
    let venues = VenueRepo::search_by_location(&state.pool, &city, &state_part).await?;

    Ok(Json(LocationSearchResponse {
        success: true,
        artists: SearchGroup::new(artists),
        venues: SearchGroup::new(venues),
    }))
}
