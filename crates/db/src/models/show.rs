//! Show model and DTOs.
//!
//! A show cannot exist without a valid artist and venue; the foreign keys
//! are enforced by the schema and dependent rows are deleted ahead of
//! their parent inside `delete_with_shows` transactions.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use encore_core::types::{DbId, Timestamp};

/// A row from the `shows` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Show {
    pub id: DbId,
    pub artist_id: DbId,
    pub venue_id: DbId,
    pub start_time: Timestamp,
}

/// DTO for creating a new show.
#[derive(Debug, Deserialize)]
pub struct CreateShow {
    pub artist_id: DbId,
    pub venue_id: DbId,
    pub start_time: Timestamp,
}

/// Global show listing row with artist and venue names joined in.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ShowDetail {
    pub venue_id: DbId,
    pub venue_name: String,
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: Timestamp,
}

/// A show as it appears on a venue's detail page.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VenueShow {
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: Timestamp,
}

/// A show as it appears on an artist's detail page.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ArtistShow {
    pub venue_id: DbId,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: Timestamp,
}
