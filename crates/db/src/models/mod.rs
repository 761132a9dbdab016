//! Entity models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` input DTO used for both create and
//!   full-record update (the API has no patch semantics)

pub mod album;
pub mod artist;
pub mod genre;
pub mod host;
pub mod host_program_pair;
pub mod playlist;
pub mod playlist_track_pair;
pub mod program;
pub mod song_request;
pub mod track;
pub mod user;
