//! Handler for the home feed.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use encore_core::directory::RECENT_LISTING_LIMIT;
use encore_db::models::artist::ArtistSummary;
use encore_db::models::venue::VenueSummary;
use encore_db::repositories::{ArtistRepo, VenueRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// Response for `GET /`.
#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub success: bool,
    /// The ten most recently listed venues, newest first.
    pub venues: Vec<VenueSummary>,
    /// The ten most recently listed artists, newest first.
    pub artists: Vec<ArtistSummary>,
}

/// GET /
///
/// The landing feed: the most recently listed venues and artists.
pub async fn index(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let venues = VenueRepo::recent(&state.pool, RECENT_LISTING_LIMIT).await?;
    let artists = ArtistRepo::recent(&state.pool, RECENT_LISTING_LIMIT).await?;

    Ok(Json(HomeResponse {
        success: true,
        venues,
        artists,
    }))
}
