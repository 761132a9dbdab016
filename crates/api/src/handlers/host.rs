//! Handlers for the host resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use radiodesk_core::types::DbId;
use radiodesk_db::models::host::{Host, HostInput};
use radiodesk_db::repositories::HostRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /all_hosts
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<Host>>> {
    let mut conn = state.pool.acquire().await?;
    let hosts = HostRepo::list_all(&mut conn).await?;
    Ok(Json(hosts))
}

/// GET /host/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Host>> {
    let mut conn = state.pool.acquire().await?;
    let host = HostRepo::get_by_id(&mut conn, id).await?;
    Ok(Json(host))
}

/// POST /add_host
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<HostInput>,
) -> AppResult<(StatusCode, Json<Host>)> {
    input.validate()?;
    let mut tx = state.pool.begin().await?;
    let host = HostRepo::create(&mut tx, &input).await?;
    tx.commit().await?;
    Ok((StatusCode::CREATED, Json(host)))
}

/// PUT /update_host/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<HostInput>,
) -> AppResult<Json<Host>> {
    input.validate()?;
    let mut tx = state.pool.begin().await?;
    let host = HostRepo::update(&mut tx, id, &input).await?;
    tx.commit().await?;
    Ok(Json(host))
}

/// DELETE /delete_host/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;
    HostRepo::delete(&mut tx, id).await?;
    tx.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
