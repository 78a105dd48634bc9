use crate::db::database_service::DatabaseService;
use crate::types::{activity::NewActivity, error::AppError};
use entity::activity::{Column, Entity as Activity, Model as ActivityModel};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

pub async fn delete_all_activities<C: ConnectionTrait>(db: &C) -> Result<u64, AppError> {
    Ok(Activity::delete_many().exec(db).await?.rows_affected)
}

/// Validates the whole batch before anything is written.
pub async fn create_activities<C: ConnectionTrait>(
    db: &C,
    batch: Vec<NewActivity>,
) -> Result<u64, AppError> {
    let rows = batch
        .into_iter()
        .map(NewActivity::build)
        .collect::<Result<Vec<_>, _>>()?;
    if rows.is_empty() {
        return Ok(0);
    }
    Ok(Activity::insert_many(rows).exec_without_returning(db).await?)
}

impl DatabaseService {
    pub async fn list_activities(&self) -> Result<Vec<ActivityModel>, AppError> {
        Ok(Activity::find().all(&self.database_connection).await?)
    }

    pub async fn list_activities_for_user(&self, user_id: Uuid) -> Result<Vec<ActivityModel>, AppError> {
        Ok(Activity::find()
            .filter(Column::UserId.eq(user_id))
            .all(&self.database_connection)
            .await?)
    }
}
