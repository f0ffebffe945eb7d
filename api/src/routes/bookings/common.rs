use chrono::{DateTime, Utc};
use db::models::{booking, event, user};
use serde::Serialize;
use services::booking_service::MyBooking;

use crate::routes::common::{BookingResponse, EventResponse, EventSummary, UserSummary};

/// A booking as returned right after it was saved.
#[derive(Debug, Serialize)]
pub struct SavedBookingResponse {
    #[serde(flatten)]
    pub booking: BookingResponse,
    pub event: EventSummary,
}

impl SavedBookingResponse {
    pub fn new(booking: booking::Model, event: event::Model, now: DateTime<Utc>) -> Self {
        Self {
            booking: booking.into(),
            event: EventSummary::new(event, now),
        }
    }
}

/// One of the caller's bookings with the full event.
#[derive(Debug, Serialize)]
pub struct MyBookingResponse {
    #[serde(flatten)]
    pub booking: BookingResponse,
    pub event: EventResponse,
}

impl MyBookingResponse {
    pub fn new(entry: MyBooking, now: DateTime<Utc>) -> Self {
        Self {
            booking: entry.booking.into(),
            event: EventResponse::new(entry.event, entry.organizer, now),
        }
    }
}

/// One row of an event's roster.
#[derive(Debug, Serialize)]
pub struct RosterEntryResponse {
    #[serde(flatten)]
    pub booking: BookingResponse,
    pub user: Option<UserSummary>,
}

impl From<(booking::Model, Option<user::Model>)> for RosterEntryResponse {
    fn from((booking, user): (booking::Model, Option<user::Model>)) -> Self {
        Self {
            booking: booking.into(),
            user: user.map(UserSummary::from),
        }
    }
}
