//! Repository for the `venues` table.

use sqlx::PgPool;

use encore_core::types::{DbId, Timestamp};

use crate::models::venue::{CreateVenue, UpdateVenue, Venue, VenueListingRow, VenueSummary};

/// Column list for venues queries.
const COLUMNS: &str = "id, name, city, state, address, phone, genres, seeking_talent, \
                       seeking_description, image_link, facebook_link, created_at";

/// Listing projection: venue identity plus its upcoming-show count.
const LISTING: &str = "v.id, v.name, v.city, v.state, \
                       COUNT(s.id) FILTER (WHERE s.start_time > $1) AS num_upcoming_shows";

/// Provides CRUD and search operations for venues.
pub struct VenueRepo;

impl VenueRepo {
    /// List every venue with its upcoming-show count, ordered by
    /// (city, state, name) so callers can group by area in one pass.
    pub async fn list_with_upcoming_counts(
        pool: &PgPool,
        now: Timestamp,
    ) -> Result<Vec<VenueListingRow>, sqlx::Error> {
        let query = format!(
            "SELECT {LISTING} FROM venues v
             LEFT JOIN shows s ON s.venue_id = v.id
             GROUP BY v.id
             ORDER BY v.city ASC, v.state ASC, v.name ASC"
        );
        sqlx::query_as::<_, VenueListingRow>(&query)
            .bind(now)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search on venue name.
    pub async fn search_by_name(
        pool: &PgPool,
        term: &str,
        now: Timestamp,
    ) -> Result<Vec<VenueListingRow>, sqlx::Error> {
        let pattern = format!("%{term}%");
        let query = format!(
            "SELECT {LISTING} FROM venues v
             LEFT JOIN shows s ON s.venue_id = v.id
             WHERE v.name ILIKE $2
             GROUP BY v.id
             ORDER BY v.name ASC"
        );
        sqlx::query_as::<_, VenueListingRow>(&query)
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
    ) -> Result<Vec<VenueListingRow>, sqlx::Error> {
        let query = format!(
            "SELECT {LISTING} FROM venues v
             LEFT JOIN shows s ON s.venue_id = v.id
             WHERE $2 = ANY(v.genres)
             GROUP BY v.id
             ORDER BY v.name ASC"
        );
        sqlx::query_as::<_, VenueListingRow>(&query)
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
    ) -> Result<Vec<VenueSummary>, sqlx::Error> {
        let city_pattern = format!("%{city}%");
        let state_pattern = format!("%{state}%");
        sqlx::query_as::<_, VenueSummary>(
            "SELECT id, name FROM venues
             WHERE city ILIKE $1 AND state ILIKE $2
             ORDER BY name ASC",
        )
        .bind(&city_pattern)
        .bind(&state_pattern)
        .fetch_all(pool)
        .await
    }

    /// The most recently listed venues, newest first.
    pub async fn recent(pool: &PgPool, limit: i64) -> Result<Vec<VenueSummary>, sqlx::Error> {
        sqlx::query_as::<_, VenueSummary>(
            "SELECT id, name FROM venues ORDER BY id DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Find a venue by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new venue, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVenue) -> Result<Venue, sqlx::Error> {
        let query = format!(
            "INSERT INTO venues (name, city, state, address, phone, genres, seeking_talent,
                                 seeking_description, image_link, facebook_link)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .fetch_one(pool)
            .await
    }

    /// Partially update a venue, returning the updated row.
    ///
    /// Text fields only change when a non-empty replacement is supplied;
    /// an omitted genre list or flag keeps its current value.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVenue,
    ) -> Result<Option<Venue>, sqlx::Error> {
        // An empty replacement list means "no change", like empty strings.
        let genres = input.genres.as_ref().filter(|g| !g.is_empty());

        let query = format!(
            "UPDATE venues SET
                name = COALESCE(NULLIF($2, ''), name),
                city = COALESCE(NULLIF($3, ''), city),
                state = COALESCE(NULLIF($4, ''), state),
                address = COALESCE(NULLIF($5, ''), address),
                phone = COALESCE(NULLIF($6, ''), phone),
                genres = COALESCE($7, genres),
                seeking_talent = COALESCE($8, seeking_talent),
                seeking_description = COALESCE(NULLIF($9, ''), seeking_description),
                image_link = COALESCE(NULLIF($10, ''), image_link),
                facebook_link = COALESCE(NULLIF($11, ''), facebook_link)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(genres)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .fetch_optional(pool)
            .await
    }

    /// Delete a venue and its dependent shows in one transaction.
    ///
    /// Shows are removed first so no orphaned rows survive; the whole
    /// operation rolls back if any statement fails. Returns `true` if
    /// the venue existed.
    pub async fn delete_with_shows(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM shows WHERE venue_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
