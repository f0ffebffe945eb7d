//! # bookings Routes Module
//!
//! Every route here sits behind `allow_authenticated` (applied in
//! `routes::routes`). Roster access is decided per event in the service.

pub mod common;
pub mod delete;
pub mod get;
pub mod post;

use axum::{
    Router,
    routing::{delete, get, post},
};
use util::state::AppState;

use delete::cancel_booking;
use get::{get_booking_stats, get_event_bookings, get_my_bookings};
use post::upsert_booking;

/// Builds the `/bookings` route group.
///
/// - `POST /bookings` → `upsert_booking`
/// - `GET /bookings/my-bookings` → `get_my_bookings`
/// - `GET /bookings/stats` → `get_booking_stats`
/// - `GET /bookings/event/{event_id}` → `get_event_bookings`
/// - `DELETE /bookings/{event_id}` → `cancel_booking`
pub fn bookings_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(upsert_booking))
        .route("/my-bookings", get(get_my_bookings))
        .route("/stats", get(get_booking_stats))
        .route("/event/{event_id}", get(get_event_bookings))
        .route("/{event_id}", delete(cancel_booking))
}
