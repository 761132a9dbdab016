use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::playlist_track_pair;
use crate::state::AppState;

/// Flat catalog routes for playlist/track associations.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/all_playlist_track_pairs",
            get(playlist_track_pair::list_all),
        )
        .route(
            "/playlist_track_pair/{id}",
            get(playlist_track_pair::get_by_id),
        )
        .route(
            "/add_playlist_track_pair",
            post(playlist_track_pair::create),
        )
        .route(
            "/update_playlist_track_pair/{id}",
            put(playlist_track_pair::update),
        )
        .route(
            "/delete_playlist_track_pair/{id}",
            delete(playlist_track_pair::delete),
        )
}
