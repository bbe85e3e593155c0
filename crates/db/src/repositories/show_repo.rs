//! Repository for the `shows` table.

use sqlx::PgPool;

use encore_core::types::{DbId, Timestamp};

use crate::models::show::{ArtistShow, CreateShow, Show, ShowDetail, VenueShow};

/// Provides listing and creation for shows. Deletion happens through the
/// owning venue's or artist's `delete_with_shows`.
pub struct ShowRepo;

impl ShowRepo {
    /// List all shows with artist and venue names joined in, soonest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ShowDetail>, sqlx::Error> {
        sqlx::query_as::<_, ShowDetail>(
            "SELECT s.venue_id, v.name AS venue_name,
                    s.artist_id, a.name AS artist_name,
                    a.image_link AS artist_image_link, s.start_time
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             JOIN artists a ON a.id = s.artist_id
             ORDER BY s.start_time ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Create a new show. Fails if the artist or venue does not exist.
    pub async fn create(pool: &PgPool, input: &CreateShow) -> Result<Show, sqlx::Error> {
        sqlx::query_as::<_, Show>(
            "INSERT INTO shows (artist_id, venue_id, start_time)
             VALUES ($1, $2, $3)
             RETURNING id, artist_id, venue_id, start_time",
        )
        .bind(input.artist_id)
        .bind(input.venue_id)
        .bind(input.start_time)
        .fetch_one(pool)
        .await
    }

    /// Shows at a venue starting after the given instant.
    pub async fn upcoming_for_venue(
        pool: &PgPool,
        venue_id: DbId,
        now: Timestamp,
    ) -> Result<Vec<VenueShow>, sqlx::Error> {
        sqlx::query_as::<_, VenueShow>(
            "SELECT s.artist_id, a.name AS artist_name,
                    a.image_link AS artist_image_link, s.start_time
             FROM shows s
             JOIN artists a ON a.id = s.artist_id
             WHERE s.venue_id = $1 AND s.start_time > $2
             ORDER BY s.start_time ASC",
        )
        .bind(venue_id)
        .bind(now)
        .fetch_all(pool)
        .await
    }

    /// Shows at a venue that started before the given instant.
    pub async fn past_for_venue(
        pool: &PgPool,
        venue_id: DbId,
        now: Timestamp,
    ) -> Result<Vec<VenueShow>, sqlx::Error> {
        sqlx::query_as::<_, VenueShow>(
            "SELECT s.artist_id, a.name AS artist_name,
                    a.image_link AS artist_image_link, s.start_time
             FROM shows s
             JOIN artists a ON a.id = s.artist_id
             WHERE s.venue_id = $1 AND s.start_time <= $2
             ORDER BY s.start_time DESC",
        )
        .bind(venue_id)
        .bind(now)
        .fetch_all(pool)
        .await
    }

    /// Shows by an artist starting after the given instant.
    pub async fn upcoming_for_artist(
        pool: &PgPool,
        artist_id: DbId,
        now: Timestamp,
    ) -> Result<Vec<ArtistShow>, sqlx::Error> {
        sqlx::query_as::<_, ArtistShow>(
            "SELECT s.venue_id, v.name AS venue_name,
                    v.image_link AS venue_image_link, s.start_time
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             WHERE s.artist_id = $1 AND s.start_time > $2
             ORDER BY s.start_time ASC",
        )
        .bind(artist_id)
        .bind(now)
        .fetch_all(pool)
        .await
    }

    /// Shows by an artist that started before the given instant.
    pub async fn past_for_artist(
        pool: &PgPool,
        artist_id: DbId,
        now: Timestamp,
    ) -> Result<Vec<ArtistShow>, sqlx::Error> {
        sqlx::query_as::<_, ArtistShow>(
            "SELECT s.venue_id, v.name AS venue_name,
                    v.image_link AS venue_image_link, s.start_time
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             WHERE s.artist_id = $1 AND s.start_time <= $2
             ORDER BY s.start_time DESC",
        )
        .bind(artist_id)
        .bind(now)
        .fetch_all(pool)
        .await
    }

    /// Count shows referencing a venue. Used by tests to verify the
    /// ordered cascade leaves no orphans.
    pub async fn count_for_venue(pool: &PgPool, venue_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM shows WHERE venue_id = $1")
                .bind(venue_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Count shows referencing an artist.
    pub async fn count_for_artist(pool: &PgPool, artist_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM shows WHERE artist_id = $1")
                .bind(artist_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }
}
