use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Flat account routes. Authentication and the admin requirement are
/// enforced by extractors on the handlers themselves.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all_users", get(user::list_all))
        .route("/user/{id}", get(user::get_by_id))
        .route("/add_user", post(user::create))
        .route("/update_user/{id}", put(user::update))
        .route("/delete_user/{id}", delete(user::delete))
}
