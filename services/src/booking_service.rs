//! RSVP / interest bookings.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use db::models::{
    booking::{self, BookingStatus, Column as BookingColumn, Entity as BookingEntity},
    event, user,
};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use serde::{Deserialize, Serialize};

use crate::access::{Requester, can_manage_event};
use crate::error::{ServiceError, ServiceResult};

/// Body of `POST /api/bookings`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingInput {
    pub event_id: Option<i64>,
    #[serde(default)]
    pub status: BookingStatus,
}

/// A booking of the current user with the full event and its organizer.
#[derive(Debug, Clone)]
pub struct MyBooking {
    pub booking: booking::Model,
    pub event: event::Model,
    pub organizer: Option<user::Model>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStats {
    pub total_bookings: u64,
    pub upcoming_events: u64,
    pub rsvp_count: u64,
    pub interested_count: u64,
}

pub struct BookingService;

impl BookingService {
    /// Creates the caller's booking for an event or changes its status.
    pub async fn upsert(
        db: &DatabaseConnection,
        user_id: i64,
        input: BookingInput,
    ) -> ServiceResult<(booking::Model, event::Model)> {
        let event_id = input
            .event_id
            .ok_or_else(|| ServiceError::Validation("Event ID is required".into()))?;

        let event = event::Entity::find_by_id(event_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Event not found".into()))?;

        let booking = booking::Model::upsert(db, user_id, event_id, input.status).await?;
        tracing::info!(user_id, event_id, status = %booking.status, "Booking saved");

        Ok((booking, event))
    }

    /// The caller's bookings, newest first.
    pub async fn list_mine(db: &DatabaseConnection, user_id: i64) -> ServiceResult<Vec<MyBooking>> {
        let rows = BookingEntity::find()
            .filter(BookingColumn::UserId.eq(user_id))
            .find_also_related(event::Entity)
            .order_by_desc(BookingColumn::CreatedAt)
            .order_by_desc(BookingColumn::Id)
            .all(db)
            .await?;

        let organizer_ids: Vec<i64> = rows
            .iter()
            .filter_map(|(_, event)| event.as_ref().map(|e| e.organizer_id))
            .collect();
        let organizers: HashMap<i64, user::Model> = user::Entity::find()
            .filter(user::Column::Id.is_in(organizer_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok(rows
            .into_iter()
            .filter_map(|(booking, event)| {
                let event = event?;
                Some(MyBooking {
                    organizer: organizers.get(&event.organizer_id).cloned(),
                    booking,
                    event,
                })
            })
            .collect())
    }

    /// Roster of an event, visible to its organizer and to admins.
    pub async fn list_for_event(
        db: &DatabaseConnection,
        requester: &Requester,
        event_id: i64,
    ) -> ServiceResult<Vec<(booking::Model, Option<user::Model>)>> {
        let event = event::Entity::find_by_id(event_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Event not found".into()))?;

        if !can_manage_event(requester, &event) {
            return Err(ServiceError::Forbidden(
                "Not authorized to view bookings".into(),
            ));
        }

        let rows = BookingEntity::find()
            .filter(BookingColumn::EventId.eq(event_id))
            .find_also_related(user::Entity)
            .order_by_desc(BookingColumn::CreatedAt)
            .order_by_desc(BookingColumn::Id)
            .all(db)
            .await?;

        Ok(rows)
    }

    pub async fn cancel(db: &DatabaseConnection, user_id: i64, event_id: i64) -> ServiceResult<()> {
        if booking::Model::cancel(db, user_id, event_id).await? {
            tracing::info!(user_id, event_id, "Booking cancelled");
            Ok(())
        } else {
            Err(ServiceError::NotFound("Booking not found".into()))
        }
    }

    /// Profile counters. An event counts as upcoming when it starts after `now`.
    pub async fn stats(
        db: &DatabaseConnection,
        user_id: i64,
        now: DateTime<Utc>,
    ) -> ServiceResult<BookingStats> {
        let mine = || BookingEntity::find().filter(BookingColumn::UserId.eq(user_id));

        let total_bookings = mine().count(db).await?;
        let rsvp_count = mine()
            .filter(BookingColumn::Status.eq(BookingStatus::Rsvp))
            .count(db)
            .await?;
        let interested_count = mine()
            .filter(BookingColumn::Status.eq(BookingStatus::Interested))
            .count(db)
            .await?;
        let upcoming_events = mine()
            .inner_join(event::Entity)
            .filter(event::Column::Date.gt(now))
            .count(db)
            .await?;

        Ok(BookingStats {
            total_bookings,
            upcoming_events,
            rsvp_count,
            interested_count,
        })
    }
}
