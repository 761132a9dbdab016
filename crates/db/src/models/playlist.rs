//! Playlist entity model and DTOs.

use radiodesk_core::types::{Date, DbId, TimeOfDay};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `playlists` table: one program's lineup for one air date.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Playlist {
    pub id: DbId,
    pub program_id: DbId,
    pub airtime: TimeOfDay,
    pub playlist_date: Date,
}

/// Input DTO for creating or fully replacing a playlist.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PlaylistInput {
    pub program_id: DbId,
    pub airtime: TimeOfDay,
    pub playlist_date: Date,
}
