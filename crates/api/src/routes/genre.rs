use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::genre;
use crate::state::AppState;

/// Flat catalog routes for genres.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all_genres", get(genre::list_all))
        .route("/genre/{id}", get(genre::get_by_id))
        .route("/add_genre", post(genre::create))
        .route("/update_genre/{id}", put(genre::update))
        .route("/delete_genre/{id}", delete(genre::delete))
}
