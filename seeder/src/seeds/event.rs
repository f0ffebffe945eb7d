use crate::seed::Seeder;
use chrono::{Duration, Utc};
use db::models::{
    event,
    user::{self, Role},
};
use fake::{
    Fake,
    faker::{address::en::CityName, lorem::en::Paragraph, lorem::en::Words},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};

const CATEGORIES: [&str; 6] = ["tech", "music", "sports", "food", "art", "community"];

pub struct EventSeeder;

#[async_trait::async_trait]
impl Seeder for EventSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let organizers = user::Entity::find()
            .filter(user::Column::Role.is_in([Role::Organizer, Role::Admin]))
            .all(db)
            .await?;

        let now = Utc::now();
        for organizer in &organizers {
            for _ in 0..fastrand::usize(2..=5) {
                let words: Vec<String> = Words(2..4).fake();
                let title = capitalize(&words.join(" "));
                let description: String = Paragraph(2..4).fake();
                let location: String = CityName().fake();
                let category = CATEGORIES[fastrand::usize(..CATEGORIES.len())];

                // Mostly upcoming, some already over
                let offset_hours = fastrand::i64(-24 * 14..24 * 60);
                let price = if fastrand::bool() {
                    0.0
                } else {
                    fastrand::u32(5..80) as f64
                };
                let image = fastrand::bool()
                    .then(|| format!("https://picsum.photos/seed/{}/800/400", fastrand::u32(..)));

                event::ActiveModel {
                    title: Set(title),
                    description: Set(description),
                    location: Set(location),
                    category: Set(category.to_owned()),
                    date: Set(now + Duration::hours(offset_hours)),
                    price: Set(price),
                    image: Set(image),
                    organizer_id: Set(organizer.id),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                }
                .insert(db)
                .await?;
            }
        }

        Ok(())
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
