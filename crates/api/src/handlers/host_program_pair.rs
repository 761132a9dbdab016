//! Handlers for the host/program association resource.
//!
//! Pairs carry their own surrogate id, so they follow the same CRUD shape as
//! every other resource rather than a composite-key API.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use radiodesk_core::types::DbId;
use radiodesk_db::models::host_program_pair::{HostProgramPair, HostProgramPairInput};
use radiodesk_db::repositories::HostProgramPairRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /all_host_program_pairs
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<HostProgramPair>>> {
    let mut conn = state.pool.acquire().await?;
    let pairs = HostProgramPairRepo::list_all(&mut conn).await?;
    Ok(Json(pairs))
}

/// GET /host_program_pair/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<HostProgramPair>> {
    let mut conn = state.pool.acquire().await?;
    let pair = HostProgramPairRepo::get_by_id(&mut conn, id).await?;
    Ok(Json(pair))
}

/// POST /add_host_program_pair
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<HostProgramPairInput>,
) -> AppResult<(StatusCode, Json<HostProgramPair>)> {
    input.validate()?;
    let mut tx = state.pool.begin().await?;
    let pair = HostProgramPairRepo::create(&mut tx, &input).await?;
    tx.commit().await?;
    Ok((StatusCode::CREATED, Json(pair)))
}

/// PUT /update_host_program_pair/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<HostProgramPairInput>,
) -> AppResult<Json<HostProgramPair>> {
    input.validate()?;
    let mut tx = state.pool.begin().await?;
    let pair = HostProgramPairRepo::update(&mut tx, id, &input).await?;
    tx.commit().await?;
    Ok(Json(pair))
}

/// DELETE /delete_host_program_pair/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;
    HostProgramPairRepo::delete(&mut tx, id).await?;
    tx.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
