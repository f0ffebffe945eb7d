use axum::{
    Extension, Json,
    extract::{Path, State, rejection::PathRejection},
    response::IntoResponse,
};
use chrono::Utc;
use services::booking_service::BookingService;
use util::state::AppState;

use super::common::{MyBookingResponse, RosterEntryResponse};
use crate::auth::AuthUser;
use crate::response::{ApiResponse, ApiResult};

/// GET /api/bookings/my-bookings
///
/// The caller's bookings, newest first, each with the full event and its
/// organizer.
pub async fn get_my_bookings(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    let now = Utc::now();
    let bookings = BookingService::list_mine(app_state.db(), user.id()).await?;

    let data: Vec<MyBookingResponse> = bookings
        .into_iter()
        .map(|entry| MyBookingResponse::new(entry, now))
        .collect();

    Ok(Json(ApiResponse::success(data, "Bookings retrieved successfully")))
}

/// GET /api/bookings/event/{event_id}
///
/// Roster of an event: every booking with the booking user's
/// `{ id, name, email }`, newest first.
///
/// ### Responses
/// - `200 OK`
/// - `403 Forbidden` with `{ "error": "Not authorized to view bookings" }` unless the
///   caller organizes the event or is an admin
/// - `404 Not Found` with `{ "error": "Event not found" }`
pub async fn get_event_bookings(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(event_id) = path?;
    let roster = BookingService::list_for_event(app_state.db(), &user.requester(), event_id).await?;

    let data: Vec<RosterEntryResponse> = roster.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::success(data, "Event bookings retrieved successfully")))
}

/// GET /api/bookings/stats
///
/// ```json
/// {
///   "success": true,
///   "data": {
///     "totalBookings": 3,
///     "upcomingEvents": 2,
///     "rsvpCount": 2,
///     "interestedCount": 1
///   },
///   "message": "Booking stats retrieved successfully"
/// }
/// ```
pub async fn get_booking_stats(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    let stats = BookingService::stats(app_state.db(), user.id(), Utc::now()).await?;

    Ok(Json(ApiResponse::success(stats, "Booking stats retrieved successfully")))
}
