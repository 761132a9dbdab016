//! Handlers for the artist resource.
//!
//! Artists reference a genre; the repository rejects creates and updates
//! pointing at a genre that does not exist.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use radiodesk_core::types::DbId;
use radiodesk_db::models::artist::{Artist, ArtistInput};
use radiodesk_db::repositories::ArtistRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /all_artists
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<Artist>>> {
    let mut conn = state.pool.acquire().await?;
    let artists = ArtistRepo::list_all(&mut conn).await?;
    Ok(Json(artists))
}

/// GET /artist/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Artist>> {
    let mut conn = state.pool.acquire().await?;
    let artist = ArtistRepo::get_by_id(&mut conn, id).await?;
    Ok(Json(artist))
}

/// POST /add_artist
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ArtistInput>,
) -> AppResult<(StatusCode, Json<Artist>)> {
    input.validate()?;
    let mut tx = state.pool.begin().await?;
    let artist = ArtistRepo::create(&mut tx, &input).await?;
    tx.commit().await?;
    Ok((StatusCode::CREATED, Json(artist)))
}

/// PUT /update_artist/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ArtistInput>,
) -> AppResult<Json<Artist>> {
    input.validate()?;
    let mut tx = state.pool.begin().await?;
    let artist = ArtistRepo::update(&mut tx, id, &input).await?;
    tx.commit().await?;
    Ok(Json(artist))
}

/// DELETE /delete_artist/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;
    ArtistRepo::delete(&mut tx, id).await?;
    tx.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
