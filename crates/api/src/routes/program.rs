use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::program;
use crate::state::AppState;

/// Flat catalog routes for broadcast programs.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all_programs", get(program::list_all))
        .route("/program/{id}", get(program::get_by_id))
        .route("/add_program", post(program::create))
        .route("/update_program/{id}", put(program::update))
        .route("/delete_program/{id}", delete(program::delete))
}
