use crate::config::EnvConfig;
use crate::types::error::AppError;
use entity::{activity, leaderboard, team, team_member, user, workout};
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, PaginatorTrait, TransactionTrait,
};
use tracing::info;

#[derive(Clone)]
pub struct DatabaseService {
    pub(crate) database_connection: DatabaseConnection,
}

/// Row counts per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub users: u64,
    pub teams: u64,
    pub memberships: u64,
    pub activities: u64,
    pub leaderboard_entries: u64,
    pub workouts: u64,
}

impl DatabaseService {
    /// Connects and brings the schema up to date.
    pub async fn new(config: &EnvConfig) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.db_url.clone());
        options.sqlx_logging(config.log_sql);
        if config.db_url.contains(":memory:") {
            // each pooled connection would open its own empty database
            options.max_connections(1);
        }

        info!("Connecting to database...");
        let database_connection = Database::connect(options).await?;
        info!("Connected ({:?}). Running migrations...", database_connection.get_database_backend());
        Migrator::up(&database_connection, None).await?;
        info!("Migrations finished.");
        Ok(Self { database_connection })
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.database_connection
    }

    pub async fn begin(&self) -> Result<DatabaseTransaction, DbErr> {
        self.database_connection.begin().await
    }

    pub async fn count_all(&self) -> Result<TableCounts, AppError> {
        let db = &self.database_connection;
        Ok(TableCounts {
            users: user::Entity::find().count(db).await?,
            teams: team::Entity::find().count(db).await?,
            memberships: team_member::Entity::find().count(db).await?,
            activities: activity::Entity::find().count(db).await?,
            leaderboard_entries: leaderboard::Entity::find().count(db).await?,
            workouts: workout::Entity::find().count(db).await?,
        })
    }
}
