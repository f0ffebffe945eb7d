use axum::{
    Extension, Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::IntoResponse,
};
use chrono::Utc;
use services::event_service::{EventInput, EventService};
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, ApiResult};
use crate::routes::common::EventResponse;

/// PUT /api/events/{event_id}
///
/// Replaces an event. Takes the same body and validation rules as
/// `POST /api/events`.
///
/// ### Responses
/// - `200 OK` with the updated event
/// - `400 Bad Request` on validation failure
/// - `403 Forbidden` with `{ "error": "Not authorized to update this event" }`
///   when the caller neither owns the event nor is an admin
/// - `404 Not Found` with `{ "error": "Event not found" }`
pub async fn update_event(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<EventInput>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(event_id) = path?;
    let Json(input) = payload?;
    let record = EventService::update(app_state.db(), &user.requester(), event_id, input).await?;

    Ok(Json(ApiResponse::success(
        EventResponse::from_record(record, Utc::now()),
        "Event updated successfully",
    )))
}
