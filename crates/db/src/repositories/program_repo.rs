//! Repository for the `programs` table.

use radiodesk_core::types::DbId;
use sqlx::PgConnection;

use crate::error::StoreError;
use crate::models::program::{Program, ProgramInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, program_name, duration, program_ratings";

/// Provides CRUD operations for programs.
pub struct ProgramRepo;

impl ProgramRepo {
    /// List all programs ordered by id.
    pub async fn list_all(conn: &mut PgConnection) -> Result<Vec<Program>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM programs ORDER BY id");
        Ok(sqlx::query_as::<_, Program>(&query).fetch_all(conn).await?)
    }

    /// Fetch a program by id, failing with `NotFound` if absent.
    pub async fn get_by_id(conn: &mut PgConnection, id: DbId) -> Result<Program, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM programs WHERE id = $1");
        sqlx::query_as::<_, Program>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await?
            .ok_or(StoreError::NotFound {
                entity: "Program",
                id,
            })
    }

    /// Insert a new program, returning the created row.
    pub async fn create(
        conn: &mut PgConnection,
        input: &ProgramInput,
    ) -> Result<Program, StoreError> {
        let query = format!(
            "INSERT INTO programs (program_name, duration, program_ratings)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Program>(&query)
            .bind(&input.program_name)
            .bind(input.duration)
            .bind(input.program_ratings)
            .fetch_one(conn)
            .await
            .map_err(|e| StoreError::classify_write(e, "Program"))
    }

    /// Replace all mutable fields of a program. Fails with `NotFound` if no
    /// row matched.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &ProgramInput,
    ) -> Result<Program, StoreError> {
        let query = format!(
            "UPDATE programs
             SET program_name = $2, duration = $3, program_ratings = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Program>(&query)
            .bind(id)
            .bind(&input.program_name)
            .bind(input.duration)
            .bind(input.program_ratings)
            .fetch_optional(conn)
            .await
            .map_err(|e| StoreError::classify_write(e, "Program"))?
            .ok_or(StoreError::NotFound {
                entity: "Program",
                id,
            })
    }

    /// Delete a program by id. Fails with `NotFound` if zero rows were
    /// affected.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM programs WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "Program",
                id,
            });
        }
        Ok(())
    }
}
