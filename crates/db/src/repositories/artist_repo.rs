//! Repository for the `artists` table.

use sqlx::PgPool;

use encore_core::types::{DbId, Timestamp};

use crate::models::artist::{
    Artist, ArtistListingRow, ArtistSummary, CreateArtist, UpdateArtist,
};

/// Column list for artists queries.
const COLUMNS: &str = "id, name, city, state, phone, genres, seeking_venue, \
                       seeking_description, image_link, facebook_link, website, created_at";

/// Listing projection: artist identity plus its upcoming-show count.
const LISTING: &str = "a.id, a.name, \
                       COUNT(s.id) FILTER (WHERE s.start_time > $1) AS num_upcoming_shows";

/// Provides CRUD and search operations for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// List every artist as a flat (id, name) listing, ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<ArtistSummary>, sqlx::Error> {
        sqlx::query_as::<_, ArtistSummary>(
            "SELECT id, name FROM artists ORDER BY name ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Case-insensitive substring search on artist name.
    pub async fn search_by_name(
        pool: &PgPool,
        term: &str,
        now: Timestamp,
    ) -> Result<Vec<ArtistListingRow>, sqlx::Error> {
        let pattern = format!("%{term}%");
        let query = format!(
            "SELECT {LISTING} FROM artists a
             LEFT JOIN shows s ON s.artist_id = a.id
             WHERE a.name ILIKE $2
             GROUP BY a.id
             ORDER BY a.name ASC"
        );
        sqlx::query_as::<_, ArtistListingRow>(&query)
            .bind(now)
            .bind(&pattern)
            .fetch_all(pool)
            .await
    }

    /// Exact genre membership match against the genres array.
    pub async fn search_by_genre(
        pool: &PgPool,
        genre: &str,
        now: Timestamp,
    ) -> Result<Vec<ArtistListingRow>, sqlx::Error> {
        let query = format!(
            "SELECT {LISTING} FROM artists a
             LEFT JOIN shows s ON s.artist_id = a.id
             WHERE $2 = ANY(a.genres)
             GROUP BY a.id
             ORDER BY a.name ASC"
        );
        sqlx::query_as::<_, ArtistListingRow>(&query)
            .bind(now)
            .bind(genre)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring match on city and state together.
    pub async fn search_by_location(
        pool: &PgPool,
        city: &str,
        state: &str,
    ) -> Result<Vec<ArtistSummary>, sqlx::Error> {
        let city_pattern = format!("%{city}%");
        let state_pattern = format!("%{state}%");
        sqlx::query_as::<_, ArtistSummary>(
            "SELECT id, name FROM artists
             WHERE city ILIKE $1 AND state ILIKE $2
             ORDER BY name ASC",
        )
        .bind(&city_pattern)
        .bind(&state_pattern)
        .fetch_all(pool)
        .await
    }

    /// The most recently listed artists, newest first.
    pub async fn recent(pool: &PgPool, limit: i64) -> Result<Vec<ArtistSummary>, sqlx::Error> {
        sqlx::query_as::<_, ArtistSummary>(
            "SELECT id, name FROM artists ORDER BY id DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Find an artist by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new artist, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateArtist) -> Result<Artist, sqlx::Error> {
        let query = format!(
            "INSERT INTO artists (name, city, state, phone, genres, seeking_venue,
                                  seeking_description, image_link, facebook_link, website)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .fetch_one(pool)
            .await
    }

    /// Partially update an artist, returning the updated row.
    ///
    /// Text fields only change when a non-empty replacement is supplied;
    /// an omitted genre list or flag keeps its current value.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArtist,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let genres = input.genres.as_ref().filter(|g| !g.is_empty());

        let query = format!(
            "UPDATE artists SET
                name = COALESCE(NULLIF($2, ''), name),
                city = COALESCE(NULLIF($3, ''), city),
                state = COALESCE(NULLIF($4, ''), state),
                phone = COALESCE(NULLIF($5, ''), phone),
                genres = COALESCE($6, genres),
                seeking_venue = COALESCE($7, seeking_venue),
                seeking_description = COALESCE(NULLIF($8, ''), seeking_description),
                image_link = COALESCE(NULLIF($9, ''), image_link),
                facebook_link = COALESCE(NULLIF($10, ''), facebook_link),
                website = COALESCE(NULLIF($11, ''), website)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(genres)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .fetch_optional(pool)
            .await
    }

    /// Delete an artist and its dependent shows in one transaction.
    ///
    /// Shows are removed first so no orphaned rows survive. Returns
    /// `true` if the artist existed.
    pub async fn delete_with_shows(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM shows WHERE artist_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
