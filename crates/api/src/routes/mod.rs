pub mod album;
pub mod artist;
pub mod auth;
pub mod genre;
pub mod health;
pub mod host;
pub mod host_program_pair;
pub mod playlist;
pub mod playlist_track_pair;
pub mod program;
pub mod song_request;
pub mod track;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
///
/// All routes live at the root in a flat scheme:
///
/// ```text
/// GET    /health                  service and database health
/// POST   /login                   issue an access token (public)
///
/// GET    /all_<entities>          list every row            (per resource)
/// GET    /<entity>/{id}           fetch one row
/// POST   /add_<entity>            create a row
/// PUT    /update_<entity>/{id}    replace a row
/// DELETE /delete_<entity>/{id}    remove a row
/// ```
///
/// Catalog resources are public; `user` routes require authentication, with
/// update/delete restricted to admins via extractors on the handlers.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(program::router())
        .merge(host::router())
        .merge(host_program_pair::router())
        .merge(genre::router())
        .merge(artist::router())
        .merge(track::router())
        .merge(album::router())
        .merge(song_request::router())
        .merge(playlist::router())
        .merge(playlist_track_pair::router())
        .merge(user::router())
}
