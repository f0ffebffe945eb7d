use axum::{
    Extension, Json,
    extract::{Path, State, rejection::PathRejection},
    response::IntoResponse,
};
use services::event_service::EventService;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, ApiResult};

/// DELETE /api/events/{event_id}
///
/// Deletes an event together with all of its bookings.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// { "success": true, "data": null, "message": "Event deleted successfully" }
/// ```
/// - `403 Forbidden` with `{ "error": "Not authorized to delete this event" }`
/// - `404 Not Found` with `{ "error": "Event not found" }`
pub async fn delete_event(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(event_id) = path?;
    EventService::delete(app_state.db(), &user.requester(), event_id).await?;

    Ok(Json(ApiResponse::success((), "Event deleted successfully")))
}
