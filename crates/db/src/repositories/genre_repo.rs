//! Repository for the `genres` table.

use radiodesk_core::types::DbId;
use sqlx::PgConnection;

use crate::error::StoreError;
use crate::models::genre::{Genre, GenreInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, genre_name, genre_desc";

/// Provides CRUD operations for genres.
pub struct GenreRepo;

impl GenreRepo {
    /// List all genres ordered by id.
    pub async fn list_all(conn: &mut PgConnection) -> Result<Vec<Genre>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM genres ORDER BY id");
        Ok(sqlx::query_as::<_, Genre>(&query).fetch_all(conn).await?)
    }

    /// Fetch a genre by id, failing with `NotFound` if absent.
    pub async fn get_by_id(conn: &mut PgConnection, id: DbId) -> Result<Genre, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM genres WHERE id = $1");
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await?
            .ok_or(StoreError::NotFound { entity: "Genre", id })
    }

    /// Insert a new genre, returning the created row.
    pub async fn create(conn: &mut PgConnection, input: &GenreInput) -> Result<Genre, StoreError> {
        let query = format!(
            "INSERT INTO genres (genre_name, genre_desc)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Genre>(&query)
            .bind(&input.genre_name)
            .bind(&input.genre_desc)
            .fetch_one(conn)
            .await
            .map_err(|e| StoreError::classify_write(e, "Genre"))
    }

    /// Replace all mutable fields of a genre. Fails with `NotFound` if no row
    /// matched.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &GenreInput,
    ) -> Result<Genre, StoreError> {
        let query = format!(
            "UPDATE genres
             SET genre_name = $2, genre_desc = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .bind(&input.genre_name)
            .bind(&input.genre_desc)
            .fetch_optional(conn)
            .await
            .map_err(|e| StoreError::classify_write(e, "Genre"))?
            .ok_or(StoreError::NotFound { entity: "Genre", id })
    }

    /// Delete a genre by id. Fails with `NotFound` if zero rows were affected.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { entity: "Genre", id });
        }
        Ok(())
    }
}
