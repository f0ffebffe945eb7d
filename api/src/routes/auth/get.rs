use axum::{Extension, Json, extract::State, response::IntoResponse};
use services::user_service::UserService;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, ApiResult};
use crate::routes::common::UserResponse;

/// GET /api/auth/me
///
/// Returns the account behind the bearer token. The role is read from the
/// database, so it reflects changes made after the token was issued.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 1,
///     "email": "sam@example.com",
///     "name": "Sam",
///     "role": "ORGANIZER",
///     "createdAt": "2026-01-01T10:00:00Z",
///     "updatedAt": "2026-01-01T10:00:00Z"
///   },
///   "message": "User retrieved successfully"
/// }
/// ```
/// - `401 Unauthorized` if the token is missing or invalid, or the account
///   no longer exists
pub async fn get_me(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    let account = UserService::find(app_state.db(), user.id()).await?;

    Ok(Json(ApiResponse::success(
        UserResponse::from(account),
        "User retrieved successfully",
    )))
}
