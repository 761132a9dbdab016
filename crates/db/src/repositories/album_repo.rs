//! Repository for the `albums` table.

use radiodesk_core::types::DbId;
use sqlx::PgConnection;

use crate::error::StoreError;
use crate::models::album::{Album, AlbumInput};
use crate::repositories::ensure_referenced;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, album_name, artist_id, track_id, year_of_release";

/// Provides CRUD operations for albums.
pub struct AlbumRepo;

impl AlbumRepo {
    /// List all albums ordered by id.
    pub async fn list_all(conn: &mut PgConnection) -> Result<Vec<Album>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM albums ORDER BY id");
        Ok(sqlx::query_as::<_, Album>(&query).fetch_all(conn).await?)
    }

    /// Fetch an album by id, failing with `NotFound` if absent.
    pub async fn get_by_id(conn: &mut PgConnection, id: DbId) -> Result<Album, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM albums WHERE id = $1");
        sqlx::query_as::<_, Album>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await?
            .ok_or(StoreError::NotFound { entity: "Album", id })
    }

    /// Insert a new album after verifying both referenced rows exist.
    pub async fn create(conn: &mut PgConnection, input: &AlbumInput) -> Result<Album, StoreError> {
        Self::check_references(&mut *conn, input).await?;

        let query = format!(
            "INSERT INTO albums (album_name, artist_id, track_id, year_of_release)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Album>(&query)
            .bind(&input.album_name)
            .bind(input.artist_id)
            .bind(input.track_id)
            .bind(input.year_of_release)
            .fetch_one(conn)
            .await
            .map_err(|e| StoreError::classify_write(e, "Album"))
    }

    /// Replace all mutable fields of an album. Fails with `NotFound` if no
    /// row matched.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &AlbumInput,
    ) -> Result<Album, StoreError> {
        Self::check_references(&mut *conn, input).await?;

        let query = format!(
            "UPDATE albums
             SET album_name = $2, artist_id = $3, track_id = $4, year_of_release = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Album>(&query)
            .bind(id)
            .bind(&input.album_name)
            .bind(input.artist_id)
            .bind(input.track_id)
            .bind(input.year_of_release)
            .fetch_optional(conn)
            .await
            .map_err(|e| StoreError::classify_write(e, "Album"))?
            .ok_or(StoreError::NotFound { entity: "Album", id })
    }

    /// Delete an album by id. Fails with `NotFound` if zero rows were
    /// affected.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM albums WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { entity: "Album", id });
        }
        Ok(())
    }

    async fn check_references(
        conn: &mut PgConnection,
        input: &AlbumInput,
    ) -> Result<(), StoreError> {
        ensure_referenced(&mut *conn, "artists", "Artist", input.artist_id).await?;
        ensure_referenced(&mut *conn, "tracks", "Track", input.track_id).await
    }
}
