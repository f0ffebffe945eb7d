use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use services::booking_service::{BookingInput, BookingService};
use util::state::AppState;

use super::common::SavedBookingResponse;
use crate::auth::AuthUser;
use crate::response::{ApiResponse, ApiResult};

/// POST /api/bookings
///
/// Books the caller onto an event, or changes the status of their existing
/// booking. There is never more than one booking per user and event.
///
/// ### Request Body
/// ```json
/// { "eventId": 4, "status": "RSVP" }
/// ```
/// `status` is `RSVP` or `INTERESTED` (default).
///
/// ### Responses
/// - `201 Created`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 12,
///     "userId": 7,
///     "eventId": 4,
///     "status": "RSVP",
///     "createdAt": "2026-01-02T10:00:00Z",
///     "updatedAt": "2026-01-02T10:05:00Z",
///     "event": {
///       "id": 4,
///       "title": "Rust Meetup",
///       "date": "2026-01-05T18:00:00Z",
///       "location": "Library",
///       "urgency": { "days": 3, "type": "soon", "message": "In 3 days" }
///     }
///   },
///   "message": "Booking created successfully"
/// }
/// ```
/// - `400 Bad Request` when `eventId` is missing or the body is malformed
/// - `404 Not Found` with `{ "error": "Event not found" }`
pub async fn upsert_booking(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<BookingInput>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(input) = payload?;
    let (booking, event) = BookingService::upsert(app_state.db(), user.id(), input).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            SavedBookingResponse::new(booking, event, Utc::now()),
            "Booking created successfully",
        )),
    ))
}
