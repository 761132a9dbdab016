//! Handlers for account management.
//!
//! Every route requires a valid bearer token; replacing or removing an
//! account additionally requires the admin flag. Responses never include the
//! password hash.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use radiodesk_core::types::DbId;
use radiodesk_db::models::user::{UserInput, UserResponse};
use radiodesk_db::repositories::UserRepo;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /all_users
pub async fn list_all(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<UserResponse>>> {
    let mut conn = state.pool.acquire().await?;
    let users = UserRepo::list_all(&mut conn).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /user/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let mut conn = state.pool.acquire().await?;
    let user = UserRepo::get_by_id(&mut conn, id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// POST /add_user
///
/// The plaintext password is hashed here at the HTTP boundary; the
/// repository layer only ever sees the PHC hash.
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<UserInput>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    input.validate()?;
    let hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let mut tx = state.pool.begin().await?;
    let user = UserRepo::create(&mut tx, &input, &hash).await?;
    tx.commit().await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// PUT /update_user/{id} (admin only)
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UserInput>,
) -> AppResult<Json<UserResponse>> {
    input.validate()?;
    let hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let mut tx = state.pool.begin().await?;
    let user = UserRepo::update(&mut tx, id, &input, &hash).await?;
    tx.commit().await?;
    Ok(Json(UserResponse::from(user)))
}

/// DELETE /delete_user/{id} (admin only)
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;
    UserRepo::delete(&mut tx, id).await?;
    tx.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
