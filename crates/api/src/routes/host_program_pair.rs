use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::host_program_pair;
use crate::state::AppState;

/// Flat catalog routes for host/program associations.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/all_host_program_pairs",
            get(host_program_pair::list_all),
        )
        .route("/host_program_pair/{id}", get(host_program_pair::get_by_id))
        .route("/add_host_program_pair", post(host_program_pair::create))
        .route(
            "/update_host_program_pair/{id}",
            put(host_program_pair::update),
        )
        .route(
            "/delete_host_program_pair/{id}",
            delete(host_program_pair::delete),
        )
}
