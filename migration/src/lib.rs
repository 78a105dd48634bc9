pub use sea_orm_migration::prelude::*;

mod m20250401_000001_create_user_table;
mod m20250401_000002_create_team_tables;
mod m20250401_000003_create_activity_table;
mod m20250401_000004_create_leaderboard_table;
mod m20250401_000005_create_workout_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250401_000001_create_user_table::Migration),
            Box::new(m20250401_000002_create_team_tables::Migration),
            Box::new(m20250401_000003_create_activity_table::Migration),
            Box::new(m20250401_000004_create_leaderboard_table::Migration),
            Box::new(m20250401_000005_create_workout_table::Migration),
        ]
    }
}
