//! Handlers for the track resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use radiodesk_core::types::DbId;
use radiodesk_db::models::track::{Track, TrackInput};
use radiodesk_db::repositories::TrackRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /all_tracks
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<Track>>> {
    let mut conn = state.pool.acquire().await?;
    let tracks = TrackRepo::list_all(&mut conn).await?;
    Ok(Json(tracks))
}

/// GET /track/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Track>> {
    let mut conn = state.pool.acquire().await?;
    let track = TrackRepo::get_by_id(&mut conn, id).await?;
    Ok(Json(track))
}

/// POST /add_track
///
/// The artist and genre references are optional; when present they must
/// point at existing rows.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<TrackInput>,
) -> AppResult<(StatusCode, Json<Track>)> {
    input.validate()?;
    let mut tx = state.pool.begin().await?;
    let track = TrackRepo::create(&mut tx, &input).await?;
    tx.commit().await?;
    Ok((StatusCode::CREATED, Json(track)))
}

/// PUT /update_track/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<TrackInput>,
) -> AppResult<Json<Track>> {
    input.validate()?;
    let mut tx = state.pool.begin().await?;
    let track = TrackRepo::update(&mut tx, id, &input).await?;
    tx.commit().await?;
    Ok(Json(track))
}

/// DELETE /delete_track/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;
    TrackRepo::delete(&mut tx, id).await?;
    tx.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
