use crate::db::database_service::DatabaseService;
use crate::types::{error::AppError, team::NewLeaderboardEntry};
use entity::leaderboard::{Column, Entity as Leaderboard, Model as LeaderboardModel};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

pub async fn delete_all_leaderboard_entries<C: ConnectionTrait>(db: &C) -> Result<u64, AppError> {
    Ok(Leaderboard::delete_many().exec(db).await?.rows_affected)
}

pub async fn create_leaderboard_entries<C: ConnectionTrait>(
    db: &C,
    batch: Vec<NewLeaderboardEntry>,
) -> Result<u64, AppError> {
    if batch.is_empty() {
        return Ok(0);
    }
    Ok(Leaderboard::insert_many(batch.into_iter().map(NewLeaderboardEntry::build))
        .exec_without_returning(db)
        .await?)
}

impl DatabaseService {
    pub async fn leaderboard_for_team(&self, team_id: Uuid) -> Result<Vec<LeaderboardModel>, AppError> {
        Ok(Leaderboard::find()
            .filter(Column::TeamId.eq(team_id))
            .all(&self.database_connection)
            .await?)
    }
}
