//! Repository for the `hosts` table.

use radiodesk_core::types::DbId;
use sqlx::PgConnection;

use crate::error::StoreError;
use crate::models::host::{Host, HostInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, host_name, experience, age";

/// Provides CRUD operations for hosts.
pub struct HostRepo;

impl HostRepo {
    /// List all hosts ordered by id.
    pub async fn list_all(conn: &mut PgConnection) -> Result<Vec<Host>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM hosts ORDER BY id");
        Ok(sqlx::query_as::<_, Host>(&query).fetch_all(conn).await?)
    }

    /// Fetch a host by id, failing with `NotFound` if absent.
    pub async fn get_by_id(conn: &mut PgConnection, id: DbId) -> Result<Host, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM hosts WHERE id = $1");
        sqlx::query_as::<_, Host>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await?
            .ok_or(StoreError::NotFound { entity: "Host", id })
    }

    /// Insert a new host, returning the created row.
    pub async fn create(conn: &mut PgConnection, input: &HostInput) -> Result<Host, StoreError> {
        let query = format!(
            "INSERT INTO hosts (host_name, experience, age)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Host>(&query)
            .bind(&input.host_name)
            .bind(input.experience)
            .bind(input.age)
            .fetch_one(conn)
            .await
            .map_err(|e| StoreError::classify_write(e, "Host"))
    }

    /// Replace all mutable fields of a host. Fails with `NotFound` if no row
    /// matched.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &HostInput,
    ) -> Result<Host, StoreError> {
        let query = format!(
            "UPDATE hosts
             SET host_name = $2, experience = $3, age = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Host>(&query)
            .bind(id)
            .bind(&input.host_name)
            .bind(input.experience)
            .bind(input.age)
            .fetch_optional(conn)
            .await
            .map_err(|e| StoreError::classify_write(e, "Host"))?
            .ok_or(StoreError::NotFound { entity: "Host", id })
    }

    /// Delete a host by id. Fails with `NotFound` if zero rows were affected.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM hosts WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { entity: "Host", id });
        }
        Ok(())
    }
}
