//! Typed persistence failures.
//!
//! Repositories never log-and-swallow: every failure is returned as a
//! [`StoreError`] and translated to an HTTP status exactly once, at the
//! request boundary.

use radiodesk_core::types::DbId;

/// PostgreSQL error code for unique constraint violations.
const PG_UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL error code for foreign key constraint violations.
const PG_FK_VIOLATION: &str = "23503";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested row does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A uniqueness constraint rejected the write.
    #[error("{0}")]
    AlreadyExists(String),

    /// A referenced row does not exist. The message names the referenced
    /// entity and the missing id so clients can correct the request.
    #[error("{0}")]
    ForeignKeyViolation(String),

    /// Any other database failure (connection loss, syntax, etc.).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Build the foreign-key failure for a pre-check that found nothing.
    pub fn missing_reference(entity: &'static str, id: DbId) -> Self {
        StoreError::ForeignKeyViolation(format!("{entity} with id {id} not found"))
    }

    /// Classify an insert/update failure for `entity`.
    ///
    /// Unique violations become [`StoreError::AlreadyExists`]. Foreign-key
    /// violations can still occur when a referenced row is deleted between
    /// the advisory pre-check and the write; those are folded back into
    /// [`StoreError::ForeignKeyViolation`]. Everything else stays a generic
    /// database error.
    pub fn classify_write(err: sqlx::Error, entity: &'static str) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.code().as_deref() {
                Some(PG_UNIQUE_VIOLATION) => {
                    return StoreError::AlreadyExists(format!(
                        "{entity} with the given details already exists"
                    ));
                }
                Some(PG_FK_VIOLATION) => {
                    let constraint = db_err.constraint().unwrap_or("unknown");
                    tracing::warn!(
                        entity,
                        constraint,
                        "write hit a foreign key constraint the pre-check did not catch"
                    );
                    return StoreError::ForeignKeyViolation(format!(
                        "{entity} write violates foreign key constraint {constraint}"
                    ));
                }
                _ => {}
            }
        }
        StoreError::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn missing_reference_names_entity_and_id() {
        let err = StoreError::missing_reference("Artist", 9999);
        assert_eq!(err.to_string(), "Artist with id 9999 not found");
    }

    #[test]
    fn classify_write_passes_through_unrelated_errors() {
        let err = StoreError::classify_write(sqlx::Error::PoolClosed, "Track");
        assert_matches!(err, StoreError::Database(_));
    }

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = StoreError::NotFound {
            entity: "Genre",
            id: 7,
        };
        assert_eq!(err.to_string(), "Genre with id 7 not found");
    }
}
