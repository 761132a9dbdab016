//! Repository for the `users` table.
//!
//! The repository never sees a plaintext password: callers hash it first and
//! pass the PHC string alongside the validated input.

use radiodesk_core::types::DbId;
use sqlx::PgConnection;

use crate::error::StoreError;
use crate::models::user::{User, UserInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, first_name, last_name, email, password_hash, phone_number, is_admin";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// List all users ordered by id.
    pub async fn list_all(conn: &mut PgConnection) -> Result<Vec<User>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY id");
        Ok(sqlx::query_as::<_, User>(&query).fetch_all(conn).await?)
    }

    /// Fetch a user by id, failing with `NotFound` if absent.
    pub async fn get_by_id(conn: &mut PgConnection, id: DbId) -> Result<User, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await?
            .ok_or(StoreError::NotFound { entity: "User", id })
    }

    /// Find a user by email (case-sensitive). Used by login and the token
    /// extractor, where absence is not an error.
    pub async fn find_by_email(
        conn: &mut PgConnection,
        email: &str,
    ) -> Result<Option<User>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        Ok(sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(conn)
            .await?)
    }

    /// Insert a new user. A duplicate email fails with `AlreadyExists`.
    pub async fn create(
        conn: &mut PgConnection,
        input: &UserInput,
        password_hash: &str,
    ) -> Result<User, StoreError> {
        let query = format!(
            "INSERT INTO users (first_name, last_name, email, password_hash,
                                phone_number, is_admin)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(password_hash)
            .bind(&input.phone_number)
            .bind(input.is_admin)
            .fetch_one(conn)
            .await
            .map_err(|e| StoreError::classify_write(e, "User"))
    }

    /// Replace all mutable fields of a user, including the credential hash.
    /// Fails with `NotFound` if no row matched.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &UserInput,
        password_hash: &str,
    ) -> Result<User, StoreError> {
        let query = format!(
            "UPDATE users
             SET first_name = $2, last_name = $3, email = $4, password_hash = $5,
                 phone_number = $6, is_admin = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(password_hash)
            .bind(&input.phone_number)
            .bind(input.is_admin)
            .fetch_optional(conn)
            .await
            .map_err(|e| StoreError::classify_write(e, "User"))?
            .ok_or(StoreError::NotFound { entity: "User", id })
    }

    /// Delete a user by id. Fails with `NotFound` if zero rows were affected.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { entity: "User", id });
        }
        Ok(())
    }
}
