//! Handlers for listener song requests.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use radiodesk_core::types::DbId;
use radiodesk_db::models::song_request::{SongRequest, SongRequestInput};
use radiodesk_db::repositories::SongRequestRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /all_song_requests
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<SongRequest>>> {
    let mut conn = state.pool.acquire().await?;
    let requests = SongRequestRepo::list_all(&mut conn).await?;
    Ok(Json(requests))
}

/// GET /song_request/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SongRequest>> {
    let mut conn = state.pool.acquire().await?;
    let request = SongRequestRepo::get_by_id(&mut conn, id).await?;
    Ok(Json(request))
}

/// POST /add_song_request
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<SongRequestInput>,
) -> AppResult<(StatusCode, Json<SongRequest>)> {
    input.validate()?;
    let mut tx = state.pool.begin().await?;
    let request = SongRequestRepo::create(&mut tx, &input).await?;
    tx.commit().await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// PUT /update_song_request/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SongRequestInput>,
) -> AppResult<Json<SongRequest>> {
    input.validate()?;
    let mut tx = state.pool.begin().await?;
    let request = SongRequestRepo::update(&mut tx, id, &input).await?;
    tx.commit().await?;
    Ok(Json(request))
}

/// DELETE /delete_song_request/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;
    SongRequestRepo::delete(&mut tx, id).await?;
    tx.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
