use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use services::event_service::{EventInput, EventService};
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, ApiResult};
use crate::routes::common::EventResponse;

/// POST /api/events
///
/// Publishes a new event owned by the caller. Requires the `ORGANIZER` or
/// `ADMIN` role.
///
/// ### Request Body
/// ```json
/// {
///   "title": "Rust Meetup",
///   "description": "Monthly meetup for Rustaceans",
///   "location": "Library",
///   "category": "tech",
///   "date": "2026-01-05T18:00:00Z",
///   "price": 0,
///   "image": "https://example.com/meetup.png"
/// }
/// ```
/// `price` defaults to `0`; `image` is optional.
///
/// ### Responses
/// - `201 Created` with the event
/// - `400 Bad Request` with every failed rule, e.g.
///   `{ "error": "Location is required; Title must be at least 3 characters long" }`
/// - `401 Unauthorized` / `403 Forbidden` from the guard
pub async fn create_event(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<EventInput>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(input) = payload?;
    let record = EventService::create(app_state.db(), &user.requester(), input).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            EventResponse::from_record(record, Utc::now()),
            "Event created successfully",
        )),
    ))
}
