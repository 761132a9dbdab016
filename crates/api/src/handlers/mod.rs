//! HTTP request handlers, one module per resource.
//!
//! Catalog handlers share a common shape: validate the payload, open one
//! transaction per request, call a single repository operation, commit.
//! Reads borrow a pooled connection directly since they mutate nothing.

pub mod album;
pub mod artist;
pub mod auth;
pub mod genre;
pub mod host;
pub mod host_program_pair;
pub mod playlist;
pub mod playlist_track_pair;
pub mod program;
pub mod song_request;
pub mod track;
pub mod user;
