//! Handlers for the genre resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use radiodesk_core::types::DbId;
use radiodesk_db::models::genre::{Genre, GenreInput};
use radiodesk_db::repositories::GenreRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /all_genres
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<Genre>>> {
    let mut conn = state.pool.acquire().await?;
    let genres = GenreRepo::list_all(&mut conn).await?;
    Ok(Json(genres))
}

/// GET /genre/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Genre>> {
    let mut conn = state.pool.acquire().await?;
    let genre = GenreRepo::get_by_id(&mut conn, id).await?;
    Ok(Json(genre))
}

/// POST /add_genre
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<GenreInput>,
) -> AppResult<(StatusCode, Json<Genre>)> {
    input.validate()?;
    let mut tx = state.pool.begin().await?;
    let genre = GenreRepo::create(&mut tx, &input).await?;
    tx.commit().await?;
    Ok((StatusCode::CREATED, Json(genre)))
}

/// PUT /update_genre/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<GenreInput>,
) -> AppResult<Json<Genre>> {
    input.validate()?;
    let mut tx = state.pool.begin().await?;
    let genre = GenreRepo::update(&mut tx, id, &input).await?;
    tx.commit().await?;
    Ok(Json(genre))
}

/// DELETE /delete_genre/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;
    GenreRepo::delete(&mut tx, id).await?;
    tx.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
