use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::artist;
use crate::state::AppState;

/// Flat catalog routes for artists.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all_artists", get(artist::list_all))
        .route("/artist/{id}", get(artist::get_by_id))
        .route("/add_artist", post(artist::create))
        .route("/update_artist/{id}", put(artist::update))
        .route("/delete_artist/{id}", delete(artist::delete))
}
