//! Event read handlers.

use axum::{
    Extension, Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    response::IntoResponse,
};
use chrono::Utc;
use services::event_service::{EventQuery, EventService};
use util::state::AppState;

use super::common::{EventListResponse, OrganizedEventResponse};
use crate::auth::AuthUser;
use crate::response::{ApiResponse, ApiResult};
use crate::routes::common::EventResponse;

/// GET /api/events
///
/// Retrieves a paginated, optionally filtered and sorted list of events.
///
/// # Query Parameters
///
/// - `search`: (Optional) Substring matched against `title`, `description` or `location`.
/// - `category`: (Optional) Exact category match.
/// - `when`: (Optional) `all` (default), `upcoming` (starts now or later) or `past`.
/// - `sortBy`: (Optional) `date`, `title`, `price`, `category`, `location` or `createdAt`.
///   Defaults to `date`.
/// - `order`: (Optional) `asc` (default) or `desc`.
/// - `page`: (Optional) Page number, starting at 1. Defaults to 1.
/// - `limit`: (Optional) Items per page, 1 to 100. Defaults to 10.
///
/// Ties are broken by event id, so paging through equal sort values is stable.
///
/// # Returns
///
/// - `200 OK`: the page of events and pagination metadata.
/// - `400 BAD REQUEST`: unknown `when`/`sortBy`/`order` value or out-of-range `page`/`limit`.
///
/// # Example Response
///
/// ```json
/// {
///   "success": true,
///   "data": {
///     "events": [
///       {
///         "id": 4,
///         "title": "Rust Meetup",
///         "description": "Monthly meetup for Rustaceans",
///         "location": "Library",
///         "category": "tech",
///         "date": "2026-01-05T18:00:00Z",
///         "price": 0.0,
///         "image": null,
///         "organizerId": 2,
///         "organizer": { "id": 2, "name": "Olivia", "email": "olivia@example.com" },
///         "createdAt": "2025-12-01T09:00:00Z",
///         "updatedAt": "2025-12-01T09:00:00Z",
///         "urgency": { "days": 2, "type": "soon", "message": "In 2 days" }
///       }
///     ],
///     "pagination": { "page": 1, "limit": 10, "total": 1, "pages": 1 }
///   },
///   "message": "Events retrieved successfully"
/// }
/// ```
pub async fn get_events(
    State(app_state): State<AppState>,
    query: Result<Query<EventQuery>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(query) = query?;
    let now = Utc::now();
    let page = EventService::list(app_state.db(), &query, now).await?;

    Ok(Json(ApiResponse::success(
        EventListResponse::new(page, now),
        "Events retrieved successfully",
    )))
}

/// GET /api/events/{event_id}
///
/// - `200 OK` with the event and its organizer
/// - `404 NOT FOUND` with `{ "error": "Event not found" }`
pub async fn get_event(
    State(app_state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(event_id) = path?;
    let record = EventService::find(app_state.db(), event_id).await?;

    Ok(Json(ApiResponse::success(
        EventResponse::from_record(record, Utc::now()),
        "Event retrieved successfully",
    )))
}

/// GET /api/events/organized
///
/// Events organized by the caller (all events for admins), soonest first, each
/// with `bookingCounts: { total, rsvp, interested }`.
pub async fn get_organized_events(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    let now = Utc::now();
    let events = EventService::organized_by(app_state.db(), &user.requester()).await?;

    let data: Vec<OrganizedEventResponse> = events
        .into_iter()
        .map(|organized| OrganizedEventResponse::new(organized, now))
        .collect();

    Ok(Json(ApiResponse::success(data, "Organized events retrieved successfully")))
}
