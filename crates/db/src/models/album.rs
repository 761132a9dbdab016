//! Album entity model and DTOs.

use radiodesk_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `albums` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Album {
    pub id: DbId,
    pub album_name: String,
    pub artist_id: DbId,
    pub track_id: DbId,
    pub year_of_release: i32,
}

/// Input DTO for creating or fully replacing an album.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AlbumInput {
    #[validate(length(min = 1, max = 255))]
    pub album_name: String,
    pub artist_id: DbId,
    pub track_id: DbId,
    #[validate(range(min = 1900, max = 2100))]
    pub year_of_release: i32,
}
