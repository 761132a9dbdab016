use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::track;
use crate::state::AppState;

/// Flat catalog routes for tracks.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all_tracks", get(track::list_all))
        .route("/track/{id}", get(track::get_by_id))
        .route("/add_track", post(track::create))
        .route("/update_track/{id}", put(track::update))
        .route("/delete_track/{id}", delete(track::delete))
}
