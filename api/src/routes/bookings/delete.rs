use axum::{
    Extension, Json,
    extract::{Path, State, rejection::PathRejection},
    response::IntoResponse,
};
use services::booking_service::BookingService;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, ApiResult};

/// DELETE /api/bookings/{event_id}
///
/// Cancels the caller's booking for the event.
///
/// - `200 OK` with message `"Booking cancelled successfully"`
/// - `404 Not Found` with `{ "error": "Booking not found" }`
pub async fn cancel_booking(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(event_id) = path?;
    BookingService::cancel(app_state.db(), user.id(), event_id).await?;

    Ok(Json(ApiResponse::success((), "Booking cancelled successfully")))
}
