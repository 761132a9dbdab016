//! Handlers for the playlist resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use radiodesk_core::types::DbId;
use radiodesk_db::models::playlist::{Playlist, PlaylistInput};
use radiodesk_db::repositories::PlaylistRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /all_playlists
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<Playlist>>> {
    let mut conn = state.pool.acquire().await?;
    let playlists = PlaylistRepo::list_all(&mut conn).await?;
    Ok(Json(playlists))
}

/// GET /playlist/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Playlist>> {
    let mut conn = state.pool.acquire().await?;
    let playlist = PlaylistRepo::get_by_id(&mut conn, id).await?;
    Ok(Json(playlist))
}

/// POST /add_playlist
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<PlaylistInput>,
) -> AppResult<(StatusCode, Json<Playlist>)> {
    input.validate()?;
    let mut tx = state.pool.begin().await?;
    let playlist = PlaylistRepo::create(&mut tx, &input).await?;
    tx.commit().await?;
    Ok((StatusCode::CREATED, Json(playlist)))
}

/// PUT /update_playlist/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<PlaylistInput>,
) -> AppResult<Json<Playlist>> {
    input.validate()?;
    let mut tx = state.pool.begin().await?;
    let playlist = PlaylistRepo::update(&mut tx, id, &input).await?;
    tx.commit().await?;
    Ok(Json(playlist))
}

/// DELETE /delete_playlist/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;
    PlaylistRepo::delete(&mut tx, id).await?;
    tx.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
