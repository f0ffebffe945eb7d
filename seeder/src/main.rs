use crate::seed::{Seeder, run_seeder};
use crate::seeds::{booking::BookingSeeder, event::EventSeeder, user::UserSeeder};
use colored::*;
use migration::Migrator;
use sea_orm_migration::MigratorTrait;

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    let db = match db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("{} {}", "Failed to connect to database:".red(), e);
            std::process::exit(1);
        }
    };

    if let Err(e) = Migrator::up(&db, None).await {
        eprintln!("{} {}", "Failed to run migrations:".red(), e);
        std::process::exit(1);
    }

    println!(
        "Seeding {} at {}",
        util::config::project_name().bold(),
        util::config::database_path()
    );

    for (seeder, name) in [
        (Box::new(UserSeeder) as Box<dyn Seeder>, "User"),
        (Box::new(EventSeeder), "Event"),
        (Box::new(BookingSeeder), "Booking"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
