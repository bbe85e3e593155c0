//! Artist model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use encore_core::types::{DbId, Timestamp};

/// A row from the `artists` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Artist {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub created_at: Timestamp,
}

/// Compact artist row used by the flat listing and the home feed.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ArtistSummary {
    pub id: DbId,
    pub name: String,
}

/// Artist row with its upcoming-show count, used by search results.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ArtistListingRow {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// DTO for creating a new artist.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateArtist {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "state is required"))]
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    #[serde(default, deserialize_with = "crate::models::checkbox")]
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    #[validate(url(message = "image_link must be a URL"))]
    pub image_link: Option<String>,
    #[validate(url(message = "facebook_link must be a URL"))]
    pub facebook_link: Option<String>,
    #[validate(url(message = "website must be a URL"))]
    pub website: Option<String>,
}

/// DTO for partially updating an artist. Omitted or empty fields keep
/// their current value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateArtist {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub genres: Option<Vec<String>>,
    #[serde(default, deserialize_with = "crate::models::checkbox_opt")]
    pub seeking_venue: Option<bool>,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
}
