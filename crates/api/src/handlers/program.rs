//! Handlers for the broadcast program resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use radiodesk_core::types::DbId;
use radiodesk_db::models::program::{Program, ProgramInput};
use radiodesk_db::repositories::ProgramRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /all_programs
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<Program>>> {
    let mut conn = state.pool.acquire().await?;
    let programs = ProgramRepo::list_all(&mut conn).await?;
    Ok(Json(programs))
}

/// GET /program/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Program>> {
    let mut conn = state.pool.acquire().await?;
    let program = ProgramRepo::get_by_id(&mut conn, id).await?;
    Ok(Json(program))
}

/// POST /add_program
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ProgramInput>,
) -> AppResult<(StatusCode, Json<Program>)> {
    input.validate()?;
    let mut tx = state.pool.begin().await?;
    let program = ProgramRepo::create(&mut tx, &input).await?;
    tx.commit().await?;
    Ok((StatusCode::CREATED, Json(program)))
}

/// PUT /update_program/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ProgramInput>,
) -> AppResult<Json<Program>> {
    input.validate()?;
    let mut tx = state.pool.begin().await?;
    let program = ProgramRepo::update(&mut tx, id, &input).await?;
    tx.commit().await?;
    Ok(Json(program))
}

/// DELETE /delete_program/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;
    ProgramRepo::delete(&mut tx, id).await?;
    tx.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
