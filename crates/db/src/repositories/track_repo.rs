//! Repository for the `tracks` table.
//!
//! Tracks are the one entity with nullable foreign keys: the artist and
//! genre references are only pre-checked when present.

use radiodesk_core::types::DbId;
use sqlx::PgConnection;

use crate::error::StoreError;
use crate::models::track::{Track, TrackInput};
use crate::repositories::ensure_referenced;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, track_name, release_date, duration, artist_id, genre_id";

/// Provides CRUD operations for tracks.
pub struct TrackRepo;

impl TrackRepo {
    /// List all tracks ordered by id.
    pub async fn list_all(conn: &mut PgConnection) -> Result<Vec<Track>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM tracks ORDER BY id");
        Ok(sqlx::query_as::<_, Track>(&query).fetch_all(conn).await?)
    }

    /// Fetch a track by id, failing with `NotFound` if absent.
    pub async fn get_by_id(conn: &mut PgConnection, id: DbId) -> Result<Track, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE id = $1");
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await?
            .ok_or(StoreError::NotFound { entity: "Track", id })
    }

    /// Insert a new track after verifying the referenced rows (when set)
    /// exist.
    pub async fn create(conn: &mut PgConnection, input: &TrackInput) -> Result<Track, StoreError> {
        Self::check_references(&mut *conn, input).await?;

        let query = format!(
            "INSERT INTO tracks (track_name, release_date, duration, artist_id, genre_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(&input.track_name)
            .bind(input.release_date)
            .bind(input.duration)
            .bind(input.artist_id)
            .bind(input.genre_id)
            .fetch_one(conn)
            .await
            .map_err(|e| StoreError::classify_write(e, "Track"))
    }

    /// Replace all mutable fields of a track. Fails with `NotFound` if no row
    /// matched.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &TrackInput,
    ) -> Result<Track, StoreError> {
        Self::check_references(&mut *conn, input).await?;

        let query = format!(
            "UPDATE tracks
             SET track_name = $2, release_date = $3, duration = $4,
                 artist_id = $5, genre_id = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .bind(&input.track_name)
            .bind(input.release_date)
            .bind(input.duration)
            .bind(input.artist_id)
            .bind(input.genre_id)
            .fetch_optional(conn)
            .await
            .map_err(|e| StoreError::classify_write(e, "Track"))?
            .ok_or(StoreError::NotFound { entity: "Track", id })
    }

    /// Delete a track by id. Fails with `NotFound` if zero rows were affected.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM tracks WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { entity: "Track", id });
        }
        Ok(())
    }

    async fn check_references(
        conn: &mut PgConnection,
        input: &TrackInput,
    ) -> Result<(), StoreError> {
        if let Some(artist_id) = input.artist_id {
            ensure_referenced(&mut *conn, "artists", "Artist", artist_id).await?;
        }
        if let Some(genre_id) = input.genre_id {
            ensure_referenced(&mut *conn, "genres", "Genre", genre_id).await?;
        }
        Ok(())
    }
}
