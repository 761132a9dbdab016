use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::playlist;
use crate::state::AppState;

/// Flat catalog routes for playlists.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all_playlists", get(playlist::list_all))
        .route("/playlist/{id}", get(playlist::get_by_id))
        .route("/add_playlist", post(playlist::create))
        .route("/update_playlist/{id}", put(playlist::update))
        .route("/delete_playlist/{id}", delete(playlist::delete))
}
