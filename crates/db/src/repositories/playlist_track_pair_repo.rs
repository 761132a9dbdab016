//! Repository for the `playlist_track_pairs` join table.

use radiodesk_core::types::DbId;
use sqlx::PgConnection;

use crate::error::StoreError;
use crate::models::playlist_track_pair::{PlaylistTrackPair, PlaylistTrackPairInput};
use crate::repositories::ensure_referenced;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, playlist_id, track_id";

/// Provides CRUD operations for playlist/track pairs.
pub struct PlaylistTrackPairRepo;

impl PlaylistTrackPairRepo {
    /// List all pairs ordered by id.
    pub async fn list_all(conn: &mut PgConnection) -> Result<Vec<PlaylistTrackPair>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM playlist_track_pairs ORDER BY id");
        Ok(sqlx::query_as::<_, PlaylistTrackPair>(&query)
            .fetch_all(conn)
            .await?)
    }

    /// Fetch a pair by id, failing with `NotFound` if absent.
    pub async fn get_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<PlaylistTrackPair, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM playlist_track_pairs WHERE id = $1");
        sqlx::query_as::<_, PlaylistTrackPair>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await?
            .ok_or(StoreError::NotFound {
                entity: "PlaylistTrackPair",
                id,
            })
    }

    /// Insert a new pair after verifying both referenced rows exist.
    pub async fn create(
        conn: &mut PgConnection,
        input: &PlaylistTrackPairInput,
    ) -> Result<PlaylistTrackPair, StoreError> {
        Self::check_references(&mut *conn, input).await?;

        let query = format!(
            "INSERT INTO playlist_track_pairs (playlist_id, track_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PlaylistTrackPair>(&query)
            .bind(input.playlist_id)
            .bind(input.track_id)
            .fetch_one(conn)
            .await
            .map_err(|e| StoreError::classify_write(e, "PlaylistTrackPair"))
    }

    /// Replace all mutable fields of a pair. Fails with `NotFound` if no row
    /// matched.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &PlaylistTrackPairInput,
    ) -> Result<PlaylistTrackPair, StoreError> {
        Self::check_references(&mut *conn, input).await?;

        let query = format!(
            "UPDATE playlist_track_pairs
             SET playlist_id = $2, track_id = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PlaylistTrackPair>(&query)
            .bind(id)
            .bind(input.playlist_id)
            .bind(input.track_id)
            .fetch_optional(conn)
            .await
            .map_err(|e| StoreError::classify_write(e, "PlaylistTrackPair"))?
            .ok_or(StoreError::NotFound {
                entity: "PlaylistTrackPair",
                id,
            })
    }

    /// Delete a pair by id. Fails with `NotFound` if zero rows were affected.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM playlist_track_pairs WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "PlaylistTrackPair",
                id,
            });
        }
        Ok(())
    }

    async fn check_references(
        conn: &mut PgConnection,
        input: &PlaylistTrackPairInput,
    ) -> Result<(), StoreError> {
        ensure_referenced(&mut *conn, "playlists", "Playlist", input.playlist_id).await?;
        ensure_referenced(&mut *conn, "tracks", "Track", input.track_id).await
    }
}
