//! Repository for the `artists` table.

use radiodesk_core::types::DbId;
use sqlx::PgConnection;

use crate::error::StoreError;
use crate::models::artist::{Artist, ArtistInput};
use crate::repositories::ensure_referenced;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, artist_name, country_name, birthdate, genre_id";

/// Provides CRUD operations for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// List all artists ordered by id.
    pub async fn list_all(conn: &mut PgConnection) -> Result<Vec<Artist>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM artists ORDER BY id");
        Ok(sqlx::query_as::<_, Artist>(&query).fetch_all(conn).await?)
    }

    /// Fetch an artist by id, failing with `NotFound` if absent.
    pub async fn get_by_id(conn: &mut PgConnection, id: DbId) -> Result<Artist, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await?
            .ok_or(StoreError::NotFound {
                entity: "Artist",
                id,
            })
    }

    /// Insert a new artist after verifying the referenced genre exists.
    pub async fn create(
        conn: &mut PgConnection,
        input: &ArtistInput,
    ) -> Result<Artist, StoreError> {
        ensure_referenced(&mut *conn, "genres", "Genre", input.genre_id).await?;

        let query = format!(
            "INSERT INTO artists (artist_name, country_name, birthdate, genre_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(&input.artist_name)
            .bind(&input.country_name)
            .bind(input.birthdate)
            .bind(input.genre_id)
            .fetch_one(conn)
            .await
            .map_err(|e| StoreError::classify_write(e, "Artist"))
    }

    /// Replace all mutable fields of an artist. Fails with `NotFound` if no
    /// row matched.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &ArtistInput,
    ) -> Result<Artist, StoreError> {
        ensure_referenced(&mut *conn, "genres", "Genre", input.genre_id).await?;

        let query = format!(
            "UPDATE artists
             SET artist_name = $2, country_name = $3, birthdate = $4, genre_id = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.artist_name)
            .bind(&input.country_name)
            .bind(input.birthdate)
            .bind(input.genre_id)
            .fetch_optional(conn)
            .await
            .map_err(|e| StoreError::classify_write(e, "Artist"))?
            .ok_or(StoreError::NotFound {
                entity: "Artist",
                id,
            })
    }

    /// Delete an artist by id. Fails with `NotFound` if zero rows were
    /// affected.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "Artist",
                id,
            });
        }
        Ok(())
    }
}
