//! Genre entity model and DTOs.

use radiodesk_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `genres` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub genre_name: String,
    pub genre_desc: Option<String>,
}

/// Input DTO for creating or fully replacing a genre.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenreInput {
    #[validate(length(min = 1, max = 255))]
    pub genre_name: String,
    #[validate(length(max = 255))]
    pub genre_desc: Option<String>,
}
