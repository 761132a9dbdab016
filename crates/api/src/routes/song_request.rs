use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::song_request;
use crate::state::AppState;

/// Flat catalog routes for listener song requests.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all_song_requests", get(song_request::list_all))
        .route("/song_request/{id}", get(song_request::get_by_id))
        .route("/add_song_request", post(song_request::create))
        .route("/update_song_request/{id}", put(song_request::update))
        .route("/delete_song_request/{id}", delete(song_request::delete))
}
