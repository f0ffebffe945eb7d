use crate::seed::Seeder;
use db::models::user::{Model, Role};
use fake::{
    Fake,
    faker::{internet::en::SafeEmail, name::en::Name},
};
use sea_orm::{DatabaseConnection, DbErr};

pub const SEED_PASSWORD: &str = "password123";

pub struct UserSeeder;

#[async_trait::async_trait]
impl Seeder for UserSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        // Fixed accounts, one per role
        for (email, name, role) in [
            ("admin@example.com", "Admin", Role::Admin),
            ("organizer@example.com", "Olivia Organizer", Role::Organizer),
            ("user@example.com", "Uma User", Role::User),
        ] {
            if Model::find_by_email(db, email).await?.is_none() {
                Model::create(db, email, name, SEED_PASSWORD, role).await?;
            }
        }

        // Random accounts
        for i in 0..12 {
            let name: String = Name().fake();
            let email: String = SafeEmail().fake();
            if Model::find_by_email(db, &email).await?.is_some() {
                continue;
            }
            let role = if i % 4 == 0 { Role::Organizer } else { Role::User };
            Model::create(db, &email, &name, SEED_PASSWORD, role).await?;
        }

        Ok(())
    }
}
