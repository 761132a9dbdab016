use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::album;
use crate::state::AppState;

/// Flat catalog routes for albums.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all_albums", get(album::list_all))
        .route("/album/{id}", get(album::get_by_id))
        .route("/add_album", post(album::create))
        .route("/update_album/{id}", put(album::update))
        .route("/delete_album/{id}", delete(album::delete))
}
