/// Domain errors raised above the persistence layer.
///
/// Persistence failures (not-found, duplicates, broken references) live in
/// `radiodesk_db::StoreError`; this enum covers everything the HTTP boundary
/// itself can reject: bad input, missing or insufficient credentials, and
/// unexpected internal failures.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
