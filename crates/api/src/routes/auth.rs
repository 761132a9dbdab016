use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Public authentication routes.
///
/// ```text
/// POST /login -> issue a JWT access token
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/login", post(auth::login))
}
