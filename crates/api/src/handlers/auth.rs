//! Login handler issuing JWT access tokens.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use radiodesk_core::error::CoreError;
use radiodesk_db::repositories::UserRepo;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::CREDENTIALS_ERROR;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

fn unauthorized() -> AppError {
    AppError::Core(CoreError::Unauthorized(CREDENTIALS_ERROR.into()))
}

/// POST /login
///
/// An unknown email and a wrong password produce the identical response, so
/// the endpoint cannot be used to enumerate registered accounts.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let mut conn = state.pool.acquire().await?;
    let user = UserRepo::find_by_email(&mut conn, &req.email)
        .await?
        .ok_or_else(unauthorized)?;

    let verified =
        verify_password(&req.password, &user.password_hash).map_err(|_| unauthorized())?;
    if !verified {
        return Err(unauthorized());
    }

    let access_token = generate_access_token(&user.email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    tracing::debug!(user_id = user.id, "issued access token");

    Ok(Json(LoginResponse {
        access_token,
        token_type: "bearer".to_string(),
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
    }))
}
