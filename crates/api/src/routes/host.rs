use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::host;
use crate::state::AppState;

/// Flat catalog routes for hosts.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all_hosts", get(host::list_all))
        .route("/host/{id}", get(host::get_by_id))
        .route("/add_host", post(host::create))
        .route("/update_host/{id}", put(host::update))
        .route("/delete_host/{id}", delete(host::delete))
}
