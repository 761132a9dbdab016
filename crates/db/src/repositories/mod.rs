//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods over
//! `&mut PgConnection`, so all queries for one request -- foreign-key
//! pre-checks included -- run inside the transaction the boundary opened.
//!
//! Foreign keys are pre-checked through [`ensure_referenced`] before any
//! write so the API can name the exact missing reference. The pre-check is
//! advisory: the schema's constraints remain the real guarantee, and a
//! constraint violation that slips past it (concurrent delete) is classified
//! by [`StoreError::classify_write`].

use radiodesk_core::types::DbId;
use sqlx::PgConnection;

use crate::error::StoreError;

pub mod album_repo;
pub mod artist_repo;
pub mod genre_repo;
pub mod host_program_pair_repo;
pub mod host_repo;
pub mod playlist_repo;
pub mod playlist_track_pair_repo;
pub mod program_repo;
pub mod song_request_repo;
pub mod track_repo;
pub mod user_repo;

pub use album_repo::AlbumRepo;
pub use artist_repo::ArtistRepo;
pub use genre_repo::GenreRepo;
pub use host_program_pair_repo::HostProgramPairRepo;
pub use host_repo::HostRepo;
pub use playlist_repo::PlaylistRepo;
pub use playlist_track_pair_repo::PlaylistTrackPairRepo;
pub use program_repo::ProgramRepo;
pub use song_request_repo::SongRequestRepo;
pub use track_repo::TrackRepo;
pub use user_repo::UserRepo;

/// Fail with [`StoreError::ForeignKeyViolation`] unless a row with the given
/// id exists in `table`. `entity` is the display name used in the message.
pub(crate) async fn ensure_referenced(
    conn: &mut PgConnection,
    table: &'static str,
    entity: &'static str,
    id: DbId,
) -> Result<(), StoreError> {
    let query = format!("SELECT EXISTS (SELECT 1 FROM {table} WHERE id = $1)");
    let (exists,): (bool,) = sqlx::query_as(&query).bind(id).fetch_one(conn).await?;
    if exists {
        Ok(())
    } else {
        tracing::debug!(table, id, "rejecting write that references a missing row");
        Err(StoreError::missing_reference(entity, id))
    }
}
