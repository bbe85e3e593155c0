//! Venue model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use encore_core::types::{DbId, Timestamp};

/// A row from the `venues` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Venue {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub created_at: Timestamp,
}

/// Compact venue row used by the home feed.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VenueSummary {
    pub id: DbId,
    pub name: String,
}

/// Venue row with its upcoming-show count, used by browse and search.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VenueListingRow {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub num_upcoming_shows: i64,
}

/// DTO for creating a new venue.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVenue {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "state is required"))]
    pub state: String,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    #[serde(default, deserialize_with = "crate::models::checkbox")]
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    #[validate(url(message = "image_link must be a URL"))]
    pub image_link: Option<String>,
    #[validate(url(message = "facebook_link must be a URL"))]
    pub facebook_link: Option<String>,
}

/// DTO for partially updating a venue. Omitted or empty fields keep
/// their current value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateVenue {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub genres: Option<Vec<String>>,
    #[serde(default, deserialize_with = "crate::models::checkbox_opt")]
    pub seeking_talent: Option<bool>,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
}
