//! Artist entity model and DTOs.

use radiodesk_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `artists` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Artist {
    pub id: DbId,
    pub artist_name: String,
    pub country_name: String,
    pub birthdate: Date,
    pub genre_id: DbId,
}

/// Input DTO for creating or fully replacing an artist.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ArtistInput {
    #[validate(length(min = 1, max = 255))]
    pub artist_name: String,
    #[validate(length(min = 1, max = 100))]
    pub country_name: String,
    pub birthdate: Date,
    pub genre_id: DbId,
}
