//! Repository for the `host_program_pairs` join table.

use radiodesk_core::types::DbId;
use sqlx::PgConnection;

use crate::error::StoreError;
use crate::models::host_program_pair::{HostProgramPair, HostProgramPairInput};
use crate::repositories::ensure_referenced;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, program_id, host_id";

/// Provides CRUD operations for host/program pairs.
pub struct HostProgramPairRepo;

impl HostProgramPairRepo {
    /// List all pairs ordered by id.
    pub async fn list_all(conn: &mut PgConnection) -> Result<Vec<HostProgramPair>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM host_program_pairs ORDER BY id");
        Ok(sqlx::query_as::<_, HostProgramPair>(&query)
            .fetch_all(conn)
            .await?)
    }

    /// Fetch a pair by id, failing with `NotFound` if absent.
    pub async fn get_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<HostProgramPair, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM host_program_pairs WHERE id = $1");
        sqlx::query_as::<_, HostProgramPair>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await?
            .ok_or(StoreError::NotFound {
                entity: "HostProgramPair",
                id,
            })
    }

    /// Insert a new pair after verifying both referenced rows exist.
    pub async fn create(
        conn: &mut PgConnection,
        input: &HostProgramPairInput,
    ) -> Result<HostProgramPair, StoreError> {
        Self::check_references(&mut *conn, input).await?;

        let query = format!(
            "INSERT INTO host_program_pairs (program_id, host_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HostProgramPair>(&query)
            .bind(input.program_id)
            .bind(input.host_id)
            .fetch_one(conn)
            .await
            .map_err(|e| StoreError::classify_write(e, "HostProgramPair"))
    }

    /// Replace all mutable fields of a pair. Fails with `NotFound` if no row
    /// matched.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &HostProgramPairInput,
    ) -> Result<HostProgramPair, StoreError> {
        Self::check_references(&mut *conn, input).await?;

        let query = format!(
            "UPDATE host_program_pairs
             SET program_id = $2, host_id = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HostProgramPair>(&query)
            .bind(id)
            .bind(input.program_id)
            .bind(input.host_id)
            .fetch_optional(conn)
            .await
            .map_err(|e| StoreError::classify_write(e, "HostProgramPair"))?
            .ok_or(StoreError::NotFound {
                entity: "HostProgramPair",
                id,
            })
    }

    /// Delete a pair by id. Fails with `NotFound` if zero rows were affected.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM host_program_pairs WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "HostProgramPair",
                id,
            });
        }
        Ok(())
    }

    async fn check_references(
        conn: &mut PgConnection,
        input: &HostProgramPairInput,
    ) -> Result<(), StoreError> {
        ensure_referenced(&mut *conn, "programs", "Program", input.program_id).await?;
        ensure_referenced(&mut *conn, "hosts", "Host", input.host_id).await
    }
}
