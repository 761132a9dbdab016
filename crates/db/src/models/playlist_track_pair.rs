//! Playlist/track join entity model and DTOs.

use radiodesk_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `playlist_track_pairs` table (many-to-many join).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PlaylistTrackPair {
    pub id: DbId,
    pub playlist_id: DbId,
    pub track_id: DbId,
}

/// Input DTO for creating or fully replacing a playlist/track pair.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PlaylistTrackPairInput {
    pub playlist_id: DbId,
    pub track_id: DbId,
}
