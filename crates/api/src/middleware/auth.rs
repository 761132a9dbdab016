//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use radiodesk_core::error::CoreError;
use radiodesk_core::types::DbId;
use radiodesk_db::repositories::UserRepo;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Uniform rejection message for every authentication failure. A caller
/// probing the API learns nothing about which step failed (missing header,
/// bad signature, expired token, deleted account).
pub const CREDENTIALS_ERROR: &str = "Could not validate credentials";

/// Authenticated user extracted from a JWT Bearer token in the `Authorization`
/// header.
///
/// The token's subject claim holds the user's email; the account is looked up
/// in the database on every request, so a token for a deleted user is rejected
/// and a changed admin flag takes effect immediately.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id.
    pub user_id: DbId,
    /// The user's email address (from `claims.sub`).
    pub email: String,
    /// Whether the user holds administrator rights.
    pub is_admin: bool,
}

fn unauthorized() -> AppError {
    AppError::Core(CoreError::Unauthorized(CREDENTIALS_ERROR.into()))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(unauthorized)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(unauthorized)?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| unauthorized())?;

        // Infrastructure failures stay 500; only "no such user" is a 401.
        let mut conn = state.pool.acquire().await?;
        let user = UserRepo::find_by_email(&mut conn, &claims.sub)
            .await?
            .ok_or_else(unauthorized)?;

        Ok(AuthUser {
            user_id: user.id,
            email: user.email,
            is_admin: user.is_admin,
        })
    }
}
