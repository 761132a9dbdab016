//! Repository for the `playlists` table.

use radiodesk_core::types::DbId;
use sqlx::PgConnection;

use crate::error::StoreError;
use crate::models::playlist::{Playlist, PlaylistInput};
use crate::repositories::ensure_referenced;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, program_id, airtime, playlist_date";

/// Provides CRUD operations for playlists.
pub struct PlaylistRepo;

impl PlaylistRepo {
    /// List all playlists ordered by id.
    pub async fn list_all(conn: &mut PgConnection) -> Result<Vec<Playlist>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM playlists ORDER BY id");
        Ok(sqlx::query_as::<_, Playlist>(&query)
            .fetch_all(conn)
            .await?)
    }

    /// Fetch a playlist by id, failing with `NotFound` if absent.
    pub async fn get_by_id(conn: &mut PgConnection, id: DbId) -> Result<Playlist, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM playlists WHERE id = $1");
        sqlx::query_as::<_, Playlist>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await?
            .ok_or(StoreError::NotFound {
                entity: "Playlist",
                id,
            })
    }

    /// Insert a new playlist after verifying the referenced program exists.
    pub async fn create(
        conn: &mut PgConnection,
        input: &PlaylistInput,
    ) -> Result<Playlist, StoreError> {
        ensure_referenced(&mut *conn, "programs", "Program", input.program_id).await?;

        let query = format!(
            "INSERT INTO playlists (program_id, airtime, playlist_date)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Playlist>(&query)
            .bind(input.program_id)
            .bind(input.airtime)
            .bind(input.playlist_date)
            .fetch_one(conn)
            .await
            .map_err(|e| StoreError::classify_write(e, "Playlist"))
    }

    /// Replace all mutable fields of a playlist. Fails with `NotFound` if no
    /// row matched.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &PlaylistInput,
    ) -> Result<Playlist, StoreError> {
        ensure_referenced(&mut *conn, "programs", "Program", input.program_id).await?;

        let query = format!(
            "UPDATE playlists
             SET program_id = $2, airtime = $3, playlist_date = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Playlist>(&query)
            .bind(id)
            .bind(input.program_id)
            .bind(input.airtime)
            .bind(input.playlist_date)
            .fetch_optional(conn)
            .await
            .map_err(|e| StoreError::classify_write(e, "Playlist"))?
            .ok_or(StoreError::NotFound {
                entity: "Playlist",
                id,
            })
    }

    /// Delete a playlist by id. Fails with `NotFound` if zero rows were
    /// affected.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM playlists WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "Playlist",
                id,
            });
        }
        Ok(())
    }
}
