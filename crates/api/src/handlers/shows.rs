//! Handlers for the `/shows` resource.
//!
//! A show must reference an existing artist and venue; the schema's
//! foreign keys reject anything else and the error surfaces as 422.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use encore_db::models::show::{CreateShow, Show, ShowDetail};
use encore_db::repositories::ShowRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Response for `GET /shows`.
#[derive(Debug, Serialize)]
pub struct ShowListResponse {
    pub success: bool,
    pub shows: Vec<ShowDetail>,
}

/// Response for `POST /shows`.
#[derive(Debug, Serialize)]
pub struct ShowResponse {
    pub success: bool,
    pub show: Show,
}

/// GET /shows
///
/// All shows with artist and venue names joined in, soonest first.
pub async fn list_shows(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let shows = ShowRepo::list_all(&state.pool).await?;

    Ok(Json(ShowListResponse {
        success: true,
        shows,
    }))
}

/// POST /shows
///
/// List a new show for an artist at a venue.
pub async fn create_show(
    State(state): State<AppState>,
    Json(input): Json<CreateShow>,
) -> AppResult<impl IntoResponse> {
    let show = ShowRepo::create(&state.pool, &input).await?;

    tracing::info!(
        show_id = show.id,
        artist_id = show.artist_id,
        venue_id = show.venue_id,
        "Show listed"
    );

    Ok((
        StatusCode::CREATED,
        Json(ShowResponse {
            success: true,
            show,
        }),
    ))
}
