//! Song request entity model and DTOs.

use radiodesk_core::types::{Date, DbId, TimeOfDay};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `song_requests` table: a listener asked a program to play
/// a track at a given date and time.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct SongRequest {
    pub id: DbId,
    pub program_id: DbId,
    pub track_id: DbId,
    pub request_time: TimeOfDay,
    pub request_date: Date,
}

/// Input DTO for creating or fully replacing a song request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SongRequestInput {
    pub program_id: DbId,
    pub track_id: DbId,
    pub request_time: TimeOfDay,
    pub request_date: Date,
}
