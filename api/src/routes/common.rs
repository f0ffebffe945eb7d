//! Response shapes shared by several route groups.

use chrono::{DateTime, Utc};
use db::models::{
    booking::{self, BookingStatus},
    event,
    user::{self, Role},
};
use serde::Serialize;
use services::event_service::EventRecord;
use util::urgency::{Urgency, urgency};

/// Public projection of a user embedded in other resources.
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<user::Model> for UserSummary {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Full account view, returned by the auth and user endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<user::Model> for UserResponse {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// An event as rendered to clients, with its organizer and a freshly
/// computed urgency label.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub date: DateTime<Utc>,
    pub price: f64,
    pub image: Option<String>,
    pub organizer_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer: Option<UserSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub urgency: Urgency,
}

impl EventResponse {
    pub fn new(event: event::Model, organizer: Option<user::Model>, now: DateTime<Utc>) -> Self {
        Self {
            urgency: urgency(event.date, now),
            id: event.id,
            title: event.title,
            description: event.description,
            location: event.location,
            category: event.category,
            date: event.date,
            price: event.price,
            image: event.image,
            organizer_id: event.organizer_id,
            organizer: organizer.map(UserSummary::from),
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }

    pub fn from_record(record: EventRecord, now: DateTime<Utc>) -> Self {
        Self::new(record.event, record.organizer, now)
    }
}

/// Short event view embedded in a freshly saved booking.
#[derive(Debug, Clone, Serialize)]
pub struct EventSummary {
    pub id: i64,
    pub title: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub urgency: Urgency,
}

impl EventSummary {
    pub fn new(event: event::Model, now: DateTime<Utc>) -> Self {
        Self {
            urgency: urgency(event.date, now),
            id: event.id,
            title: event.title,
            date: event.date,
            location: event.location,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: i64,
    pub user_id: i64,
    pub event_id: i64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<booking::Model> for BookingResponse {
    fn from(booking: booking::Model) -> Self {
        Self {
            id: booking.id,
            user_id: booking.user_id,
            event_id: booking.event_id,
            status: booking.status,
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}
