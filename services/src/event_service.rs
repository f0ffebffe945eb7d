//! Event catalogue: the paginated query and event CRUD.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use db::models::{
    booking,
    event::{self, Column as EventColumn, Entity as EventEntity},
    user::{self, Role},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select, Set, TransactionTrait,
    sea_query::{Expr, LikeExpr},
};
use serde::{Deserialize, Serialize};
use strum::EnumString;
use validator::Validate;

use crate::access::{Requester, can_create_events, can_manage_event};
use crate::error::{ServiceError, ServiceResult};
use crate::validation::validate_timestamp;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// Payload for creating or replacing an event.
///
/// Missing string fields deserialize as empty and are then rejected by the
/// length rules, so a sparse body yields field messages rather than a
/// deserialization error.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EventInput {
    #[serde(default)]
    #[validate(length(min = 3, message = "Title must be at least 3 characters long"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 10, message = "Description must be at least 10 characters long"))]
    pub description: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    #[serde(default)]
    #[validate(custom(function = "validate_timestamp"))]
    pub date: String,

    #[validate(range(min = 0.0, message = "Price must be a non-negative number"))]
    pub price: Option<f64>,

    #[validate(url(message = "Image must be a valid URI"))]
    pub image: Option<String>,
}

impl EventInput {
    /// Validates and returns the parsed date.
    fn checked_date(&self) -> ServiceResult<DateTime<Utc>> {
        self.validate()?;
        util::timestamp::parse_timestamp(&self.date)
            .ok_or_else(|| ServiceError::Validation("Date must be a valid timestamp".into()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum TimeWindow {
    #[default]
    All,
    Upcoming,
    Past,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum EventSort {
    #[default]
    Date,
    Title,
    Price,
    Category,
    Location,
    CreatedAt,
}

impl EventSort {
    fn column(self) -> EventColumn {
        match self {
            EventSort::Date => EventColumn::Date,
            EventSort::Title => EventColumn::Title,
            EventSort::Price => EventColumn::Price,
            EventSort::Category => EventColumn::Category,
            EventSort::Location => EventColumn::Location,
            EventSort::CreatedAt => EventColumn::CreatedAt,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Raw listing parameters as they arrive on the query string.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EventQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub when: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,

    #[validate(range(min = 1, message = "page must be a positive integer"))]
    pub page: Option<u64>,

    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<u64>,
}

/// Listing parameters after defaults and validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub window: TimeWindow,
    pub sort: EventSort,
    pub order: SortOrder,
    pub page: u64,
    pub limit: u64,
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

impl EventQuery {
    pub fn resolve(&self) -> ServiceResult<ResolvedQuery> {
        self.validate()?;

        let window = match non_empty(&self.when) {
            Some(raw) => raw
                .parse()
                .map_err(|_| ServiceError::Validation(format!("Invalid when value: {raw}")))?,
            None => TimeWindow::default(),
        };

        let sort = match non_empty(&self.sort_by) {
            Some(raw) => raw
                .parse()
                .map_err(|_| ServiceError::Validation(format!("Invalid sortBy value: {raw}")))?,
            None => EventSort::default(),
        };

        let order = match non_empty(&self.order) {
            Some(raw) => raw
                .parse()
                .map_err(|_| ServiceError::Validation(format!("Invalid order value: {raw}")))?,
            None => SortOrder::default(),
        };

        let page = self.page.unwrap_or(DEFAULT_PAGE);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);

        // The row offset is bound as a signed 64-bit integer.
        let offset_fits = (page - 1)
            .checked_mul(limit)
            .is_some_and(|offset| i64::try_from(offset).is_ok());
        if !offset_fits {
            return Err(ServiceError::Validation("page is too large".into()));
        }

        Ok(ResolvedQuery {
            search: non_empty(&self.search),
            category: non_empty(&self.category),
            window,
            sort,
            order,
            page,
            limit,
        })
    }
}

/// An event joined with its organizer.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    pub event: event::Model,
    pub organizer: Option<user::Model>,
}

impl From<(event::Model, Option<user::Model>)> for EventRecord {
    fn from((event, organizer): (event::Model, Option<user::Model>)) -> Self {
        Self { event, organizer }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub pages: u64,
}

impl Pagination {
    pub fn new(page: u64, limit: u64, total: u64) -> Self {
        Self {
            page,
            limit,
            total,
            pages: total.div_ceil(limit.max(1)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventPage {
    pub events: Vec<EventRecord>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BookingCounts {
    pub total: u64,
    pub rsvp: u64,
    pub interested: u64,
}

#[derive(Debug, Clone)]
pub struct OrganizedEvent {
    pub event: event::Model,
    pub counts: BookingCounts,
}

/// `LIKE` pattern matching `search` as a literal substring, escaped with a backslash.
fn contains_pattern(search: &str) -> LikeExpr {
    let mut escaped = String::with_capacity(search.len() + 2);
    escaped.push('%');
    for c in search.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    LikeExpr::new(escaped).escape('\\')
}

fn apply_filters(
    mut select: Select<EventEntity>,
    query: &ResolvedQuery,
    now: DateTime<Utc>,
) -> Select<EventEntity> {
    if let Some(search) = &query.search {
        let contains = |column: EventColumn| {
            Expr::col((EventEntity, column)).like(contains_pattern(search))
        };
        select = select.filter(
            Condition::any()
                .add(contains(EventColumn::Title))
                .add(contains(EventColumn::Description))
                .add(contains(EventColumn::Location)),
        );
    }

    if let Some(category) = &query.category {
        select = select.filter(EventColumn::Category.eq(category.as_str()));
    }

    match query.window {
        TimeWindow::All => select,
        TimeWindow::Upcoming => select.filter(EventColumn::Date.gte(now)),
        TimeWindow::Past => select.filter(EventColumn::Date.lt(now)),
    }
}

pub struct EventService;

impl EventService {
    /// Searches, filters, sorts and paginates events.
    ///
    /// `id ASC` is always the last sort key so that equal sort values keep a
    /// stable order across pages. A page past the end is an empty list.
    pub async fn list(
        db: &DatabaseConnection,
        query: &EventQuery,
        now: DateTime<Utc>,
    ) -> ServiceResult<EventPage> {
        let resolved = query.resolve()?;

        let select = apply_filters(EventEntity::find(), &resolved, now);
        let select = match resolved.order {
            SortOrder::Asc => select.order_by_asc(resolved.sort.column()),
            SortOrder::Desc => select.order_by_desc(resolved.sort.column()),
        }
        .order_by_asc(EventColumn::Id);

        let paginator = select
            .find_also_related(user::Entity)
            .paginate(db, resolved.limit);
        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(resolved.page - 1).await?;

        tracing::debug!(
            total,
            page = resolved.page,
            limit = resolved.limit,
            "Listed events"
        );

        Ok(EventPage {
            events: rows.into_iter().map(EventRecord::from).collect(),
            pagination: Pagination::new(resolved.page, resolved.limit, total),
        })
    }

    pub async fn find(db: &DatabaseConnection, id: i64) -> ServiceResult<EventRecord> {
        EventEntity::find_by_id(id)
            .find_also_related(user::Entity)
            .one(db)
            .await?
            .map(EventRecord::from)
            .ok_or_else(|| ServiceError::NotFound("Event not found".into()))
    }

    pub async fn create(
        db: &DatabaseConnection,
        requester: &Requester,
        input: EventInput,
    ) -> ServiceResult<EventRecord> {
        if !can_create_events(requester.role) {
            return Err(ServiceError::Forbidden(
                "Not authorized to create events".into(),
            ));
        }

        let date = input.checked_date()?;
        let now = Utc::now();

        let created = event::ActiveModel {
            title: Set(input.title),
            description: Set(input.description),
            location: Set(input.location),
            category: Set(input.category),
            date: Set(date),
            price: Set(input.price.unwrap_or(0.0)),
            image: Set(input.image),
            organizer_id: Set(requester.id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;

        tracing::info!(event_id = created.id, organizer_id = requester.id, "Event created");
        Self::find(db, created.id).await
    }

    /// Replaces every editable field of an event.
    pub async fn update(
        db: &DatabaseConnection,
        requester: &Requester,
        id: i64,
        input: EventInput,
    ) -> ServiceResult<EventRecord> {
        let date = input.checked_date()?;

        let existing = EventEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Event not found".into()))?;

        if !can_manage_event(requester, &existing) {
            return Err(ServiceError::Forbidden(
                "Not authorized to update this event".into(),
            ));
        }

        let mut active: event::ActiveModel = existing.into();
        active.title = Set(input.title);
        active.description = Set(input.description);
        active.location = Set(input.location);
        active.category = Set(input.category);
        active.date = Set(date);
        active.price = Set(input.price.unwrap_or(0.0));
        active.image = Set(input.image);
        active.updated_at = Set(Utc::now());
        active.update(db).await?;

        tracing::info!(event_id = id, user_id = requester.id, "Event updated");
        Self::find(db, id).await
    }

    /// Deletes an event and its bookings in one transaction.
    pub async fn delete(
        db: &DatabaseConnection,
        requester: &Requester,
        id: i64,
    ) -> ServiceResult<()> {
        let existing = EventEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Event not found".into()))?;

        if !can_manage_event(requester, &existing) {
            return Err(ServiceError::Forbidden(
                "Not authorized to delete this event".into(),
            ));
        }

        let txn = db.begin().await?;
        let removed = booking::Entity::delete_many()
            .filter(booking::Column::EventId.eq(id))
            .exec(&txn)
            .await?;
        EventEntity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        tracing::info!(
            event_id = id,
            user_id = requester.id,
            bookings_removed = removed.rows_affected,
            "Event deleted"
        );
        Ok(())
    }

    /// Events the requester organizes (every event for an admin), soonest
    /// first, with booking counts per status.
    pub async fn organized_by(
        db: &DatabaseConnection,
        requester: &Requester,
    ) -> ServiceResult<Vec<OrganizedEvent>> {
        let mut select = EventEntity::find();
        match requester.role {
            Role::Admin => {}
            Role::Organizer | Role::User => {
                select = select.filter(EventColumn::OrganizerId.eq(requester.id));
            }
        }

        let events = select
            .order_by_asc(EventColumn::Date)
            .order_by_asc(EventColumn::Id)
            .all(db)
            .await?;

        let ids: Vec<i64> = events.iter().map(|e| e.id).collect();
        let rows: Vec<(i64, String, i64)> = booking::Entity::find()
            .select_only()
            .column(booking::Column::EventId)
            .column(booking::Column::Status)
            .column_as(booking::Column::Id.count(), "count")
            .filter(booking::Column::EventId.is_in(ids))
            .group_by(booking::Column::EventId)
            .group_by(booking::Column::Status)
            .into_tuple()
            .all(db)
            .await?;

        let mut counts: HashMap<i64, BookingCounts> = HashMap::new();
        for (event_id, status, n) in rows {
            let entry = counts.entry(event_id).or_default();
            let n = n.max(0) as u64;
            entry.total += n;
            match status.parse::<booking::BookingStatus>() {
                Ok(booking::BookingStatus::Rsvp) => entry.rsvp += n,
                Ok(booking::BookingStatus::Interested) => entry.interested += n,
                Err(_) => tracing::warn!(event_id, status = %status, "Unknown booking status"),
            }
        }

        Ok(events
            .into_iter()
            .map(|event| OrganizedEvent {
                counts: counts.get(&event.id).copied().unwrap_or_default(),
                event,
            })
            .collect())
    }
}
