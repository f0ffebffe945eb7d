use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::OnConflict;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A user's intent to attend an event. At most one row per (user, event).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub user_id: i64,
    pub event_id: i64,

    pub status: BookingStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum BookingStatus {
    /// Firm attendance.
    #[sea_orm(string_value = "RSVP")]
    Rsvp,

    /// Soft interest.
    #[default]
    #[sea_orm(string_value = "INTERESTED")]
    Interested,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,

    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id",
        on_delete = "Cascade"
    )]
    Event,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn find_for(
        db: &impl ConnectionTrait,
        user_id: i64,
        event_id: i64,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::EventId.eq(event_id))
            .one(db)
            .await
    }

    /// Inserts the booking, or overwrites the status of the existing one.
    ///
    /// Runs as a single `INSERT .. ON CONFLICT(user_id, event_id) DO UPDATE`
    /// so two concurrent calls for the same pair still leave one row.
    pub async fn upsert(
        db: &impl ConnectionTrait,
        user_id: i64,
        event_id: i64,
        status: BookingStatus,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let active_model = ActiveModel {
            user_id: Set(user_id),
            event_id: Set(event_id),
            status: Set(status),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        Entity::insert(active_model)
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::EventId])
                    .update_columns([Column::Status, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await?;

        Self::find_for(db, user_id, event_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Booking not found".to_string()))
    }

    /// Deletes the booking for the pair. Returns whether a row was removed.
    pub async fn cancel(
        db: &impl ConnectionTrait,
        user_id: i64,
        event_id: i64,
    ) -> Result<bool, DbErr> {
        let result = Entity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::EventId.eq(event_id))
            .exec(db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
