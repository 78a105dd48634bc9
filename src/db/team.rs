use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::team::{membership, NewTeam};
use entity::team::{Column, Entity as Team, Model as TeamModel};
use entity::team_member::{self, Entity as TeamMember};
use entity::user::{Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait, QueryFilter,
};
use uuid::Uuid;

pub async fn persisted_teams<C: ConnectionTrait>(db: &C) -> Result<Vec<TeamModel>, AppError> {
    Ok(Team::find().filter(Column::Id.is_not_null()).all(db).await?)
}

/// Detaches every user from the team. Users themselves are untouched.
pub async fn clear_members<C: ConnectionTrait>(db: &C, team_id: Uuid) -> Result<u64, AppError> {
    let res = TeamMember::delete_many()
        .filter(team_member::Column::TeamId.eq(team_id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}

/// Leaderboard entries cascade with their team.
pub async fn delete_persisted_teams<C: ConnectionTrait>(db: &C) -> Result<u64, AppError> {
    let res = Team::delete_many()
        .filter(Column::Id.is_not_null())
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}

pub async fn create_team<C: ConnectionTrait>(db: &C, payload: NewTeam) -> Result<TeamModel, AppError> {
    Ok(payload.build()?.insert(db).await?)
}

pub async fn add_members<C: ConnectionTrait>(
    db: &C,
    team_id: Uuid,
    user_ids: &[Uuid],
) -> Result<u64, AppError> {
    if user_ids.is_empty() {
        return Ok(0);
    }
    Ok(TeamMember::insert_many(user_ids.iter().map(|uid| membership(team_id, *uid)))
        .exec_without_returning(db)
        .await?)
}

impl DatabaseService {
    pub async fn get_team(&self, id: Uuid) -> Result<TeamModel, AppError> {
        Ok(Team::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or(DbErr::RecordNotFound("Team not found".to_string()))?)
    }

    pub async fn get_team_by_name(&self, name: &str) -> Result<TeamModel, AppError> {
        Ok(Team::find()
            .filter(Column::Name.eq(name))
            .one(&self.database_connection)
            .await?
            .ok_or(DbErr::RecordNotFound("Team not found".to_string()))?)
    }

    pub async fn list_teams(&self) -> Result<Vec<TeamModel>, AppError> {
        Ok(Team::find().all(&self.database_connection).await?)
    }

    pub async fn list_team_members(&self, team_id: Uuid) -> Result<Vec<UserModel>, AppError> {
        let team = self.get_team(team_id).await?;
        Ok(team.find_related(User).all(&self.database_connection).await?)
    }

    pub async fn delete_team(&self, id: Uuid) -> Result<(), AppError> {
        let res = Team::delete_by_id(id)
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("Team not found".into()));
        }
        Ok(())
    }
}
