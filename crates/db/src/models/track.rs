//! Track entity model and DTOs.

use radiodesk_core::types::{Date, DbId, TimeOfDay};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `tracks` table.
///
/// Both foreign keys are nullable: a track may exist before its artist or
/// genre is catalogued.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Track {
    pub id: DbId,
    pub track_name: String,
    pub release_date: Date,
    pub duration: TimeOfDay,
    pub artist_id: Option<DbId>,
    pub genre_id: Option<DbId>,
}

/// Input DTO for creating or fully replacing a track.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TrackInput {
    #[validate(length(min = 1, max = 255))]
    pub track_name: String,
    pub release_date: Date,
    pub duration: TimeOfDay,
    pub artist_id: Option<DbId>,
    pub genre_id: Option<DbId>,
}
