//! Handlers for the album resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use radiodesk_core::types::DbId;
use radiodesk_db::models::album::{Album, AlbumInput};
use radiodesk_db::repositories::AlbumRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /all_albums
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<Album>>> {
    let mut conn = state.pool.acquire().await?;
    let albums = AlbumRepo::list_all(&mut conn).await?;
    Ok(Json(albums))
}

/// GET /album/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Album>> {
    let mut conn = state.pool.acquire().await?;
    let album = AlbumRepo::get_by_id(&mut conn, id).await?;
    Ok(Json(album))
}

/// POST /add_album
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<AlbumInput>,
) -> AppResult<(StatusCode, Json<Album>)> {
    input.validate()?;
    let mut tx = state.pool.begin().await?;
    let album = AlbumRepo::create(&mut tx, &input).await?;
    tx.commit().await?;
    Ok((StatusCode::CREATED, Json(album)))
}

/// PUT /update_album/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AlbumInput>,
) -> AppResult<Json<Album>> {
    input.validate()?;
    let mut tx = state.pool.begin().await?;
    let album = AlbumRepo::update(&mut tx, id, &input).await?;
    tx.commit().await?;
    Ok(Json(album))
}

/// DELETE /delete_album/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;
    AlbumRepo::delete(&mut tx, id).await?;
    tx.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
