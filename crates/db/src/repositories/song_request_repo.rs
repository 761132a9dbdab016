//! Repository for the `song_requests` table.

use radiodesk_core::types::DbId;
use sqlx::PgConnection;

use crate::error::StoreError;
use crate::models::song_request::{SongRequest, SongRequestInput};
use crate::repositories::ensure_referenced;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, program_id, track_id, request_time, request_date";

/// Provides CRUD operations for song requests.
pub struct SongRequestRepo;

impl SongRequestRepo {
    /// List all song requests ordered by id.
    pub async fn list_all(conn: &mut PgConnection) -> Result<Vec<SongRequest>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM song_requests ORDER BY id");
        Ok(sqlx::query_as::<_, SongRequest>(&query)
            .fetch_all(conn)
            .await?)
    }

    /// Fetch a song request by id, failing with `NotFound` if absent.
    pub async fn get_by_id(conn: &mut PgConnection, id: DbId) -> Result<SongRequest, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM song_requests WHERE id = $1");
        sqlx::query_as::<_, SongRequest>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await?
            .ok_or(StoreError::NotFound {
                entity: "SongRequest",
                id,
            })
    }

    /// Insert a new song request after verifying both referenced rows exist.
    pub async fn create(
        conn: &mut PgConnection,
        input: &SongRequestInput,
    ) -> Result<SongRequest, StoreError> {
        Self::check_references(&mut *conn, input).await?;

        let query = format!(
            "INSERT INTO song_requests (program_id, track_id, request_time, request_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SongRequest>(&query)
            .bind(input.program_id)
            .bind(input.track_id)
            .bind(input.request_time)
            .bind(input.request_date)
            .fetch_one(conn)
            .await
            .map_err(|e| StoreError::classify_write(e, "SongRequest"))
    }

    /// Replace all mutable fields of a song request. Fails with `NotFound`
    /// if no row matched.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &SongRequestInput,
    ) -> Result<SongRequest, StoreError> {
        Self::check_references(&mut *conn, input).await?;

        let query = format!(
            "UPDATE song_requests
             SET program_id = $2, track_id = $3, request_time = $4, request_date = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SongRequest>(&query)
            .bind(id)
            .bind(input.program_id)
            .bind(input.track_id)
            .bind(input.request_time)
            .bind(input.request_date)
            .fetch_optional(conn)
            .await
            .map_err(|e| StoreError::classify_write(e, "SongRequest"))?
            .ok_or(StoreError::NotFound {
                entity: "SongRequest",
                id,
            })
    }

    /// Delete a song request by id. Fails with `NotFound` if zero rows were
    /// affected.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM song_requests WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "SongRequest",
                id,
            });
        }
        Ok(())
    }

    async fn check_references(
        conn: &mut PgConnection,
        input: &SongRequestInput,
    ) -> Result<(), StoreError> {
        ensure_referenced(&mut *conn, "programs", "Program", input.program_id).await?;
        ensure_referenced(&mut *conn, "tracks", "Track", input.track_id).await
    }
}
