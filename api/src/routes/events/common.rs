use chrono::{DateTime, Utc};
use serde::Serialize;
use services::event_service::{BookingCounts, EventPage, OrganizedEvent, Pagination};

use crate::routes::common::EventResponse;

#[derive(Debug, Serialize)]
pub struct EventListResponse {
    pub events: Vec<EventResponse>,
    pub pagination: Pagination,
}

impl EventListResponse {
    pub fn new(page: EventPage, now: DateTime<Utc>) -> Self {
        Self {
            events: page
                .events
                .into_iter()
                .map(|record| EventResponse::from_record(record, now))
                .collect(),
            pagination: page.pagination,
        }
    }
}

/// An organizer's event together with how many people booked it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizedEventResponse {
    #[serde(flatten)]
    pub event: EventResponse,
    pub booking_counts: BookingCounts,
}

impl OrganizedEventResponse {
    pub fn new(organized: OrganizedEvent, now: DateTime<Utc>) -> Self {
        Self {
            event: EventResponse::new(organized.event, None, now),
            booking_counts: organized.counts,
        }
    }
}
