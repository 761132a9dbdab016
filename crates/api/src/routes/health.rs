use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::state::AppState;

/// GET /health
///
/// Answers 200 while the database responds to a round-trip and 503 once it
/// stops, so a load balancer can pull the instance out of rotation. The body
/// carries the crate version and pool occupancy for quick inspection.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let db_healthy = radiodesk_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let body = json!({
        "status": if db_healthy { "ok" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "database": {
            "healthy": db_healthy,
            "pool_connections": state.pool.size(),
            "pool_idle": state.pool.num_idle(),
        },
    });

    (status, Json(body))
}

/// Mount the health check route.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
