use crate::seed::Seeder;
use db::models::{
    booking::{self, BookingStatus},
    event, user,
};
use rand::seq::SliceRandom;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

pub struct BookingSeeder;

#[async_trait::async_trait]
impl Seeder for BookingSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let users = user::Entity::find().all(db).await?;
        let events = event::Entity::find().all(db).await?;

        // Build every pick up front; ThreadRng is not Send across awaits.
        let picks: Vec<(i64, i64, BookingStatus)> = {
            let mut rng = rand::thread_rng();
            users
                .iter()
                .flat_map(|u| {
                    let count = fastrand::usize(0..=4).min(events.len());
                    events
                        .choose_multiple(&mut rng, count)
                        .map(|e| {
                            let status = if fastrand::bool() {
                                BookingStatus::Rsvp
                            } else {
                                BookingStatus::Interested
                            };
                            (u.id, e.id, status)
                        })
                        .collect::<Vec<_>>()
                })
                .collect()
        };

        for (user_id, event_id, status) in picks {
            booking::Model::upsert(db, user_id, event_id, status).await?;
        }

        Ok(())
    }
}
