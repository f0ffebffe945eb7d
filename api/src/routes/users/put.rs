use axum::{
    Extension, Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::IntoResponse,
};
use services::user_service::{RoleInput, UserService};
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, ApiResult};
use crate::routes::common::UserResponse;

/// PUT /api/users/{user_id}/role
///
/// Changes a user's role. Admin only.
///
/// ### Request Body
/// ```json
/// { "role": "ORGANIZER" }
/// ```
///
/// ### Responses
/// - `200 OK` with the updated user
/// - `400 Bad Request` for an unknown role
/// - `403 Forbidden` for non-admins
/// - `404 Not Found` with `{ "error": "User not found" }`
pub async fn update_user_role(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<RoleInput>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(user_id) = path?;
    let Json(RoleInput { role }) = payload?;
    let updated = UserService::set_role(app_state.db(), &user.requester(), user_id, role).await?;

    Ok(Json(ApiResponse::success(
        UserResponse::from(updated),
        "User role updated successfully",
    )))
}
