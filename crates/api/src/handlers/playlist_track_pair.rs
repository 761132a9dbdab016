//! Handlers for the playlist/track association resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use radiodesk_core::types::DbId;
use radiodesk_db::models::playlist_track_pair::{PlaylistTrackPair, PlaylistTrackPairInput};
use radiodesk_db::repositories::PlaylistTrackPairRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /all_playlist_track_pairs
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<PlaylistTrackPair>>> {
    let mut conn = state.pool.acquire().await?;
    let pairs = PlaylistTrackPairRepo::list_all(&mut conn).await?;
    Ok(Json(pairs))
}

/// GET /playlist_track_pair/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PlaylistTrackPair>> {
    let mut conn = state.pool.acquire().await?;
    let pair = PlaylistTrackPairRepo::get_by_id(&mut conn, id).await?;
    Ok(Json(pair))
}

/// POST /add_playlist_track_pair
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<PlaylistTrackPairInput>,
) -> AppResult<(StatusCode, Json<PlaylistTrackPair>)> {
    input.validate()?;
    let mut tx = state.pool.begin().await?;
    let pair = PlaylistTrackPairRepo::create(&mut tx, &input).await?;
    tx.commit().await?;
    Ok((StatusCode::CREATED, Json(pair)))
}

/// PUT /update_playlist_track_pair/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<PlaylistTrackPairInput>,
) -> AppResult<Json<PlaylistTrackPair>> {
    input.validate()?;
    let mut tx = state.pool.begin().await?;
    let pair = PlaylistTrackPairRepo::update(&mut tx, id, &input).await?;
    tx.commit().await?;
    Ok(Json(pair))
}

/// DELETE /delete_playlist_track_pair/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;
    PlaylistTrackPairRepo::delete(&mut tx, id).await?;
    tx.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
