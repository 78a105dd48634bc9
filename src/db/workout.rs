use crate::db::database_service::DatabaseService;
use crate::types::{error::AppError, workout::NewWorkout};
use entity::workout::{Entity as Workout, Model as WorkoutModel};
use sea_orm::{ConnectionTrait, EntityTrait};

pub async fn delete_all_workouts<C: ConnectionTrait>(db: &C) -> Result<u64, AppError> {
    Ok(Workout::delete_many().exec(db).await?.rows_affected)
}

pub async fn create_workouts<C: ConnectionTrait>(
    db: &C,
    batch: Vec<NewWorkout>,
) -> Result<u64, AppError> {
    let rows = batch
        .into_iter()
        .map(NewWorkout::build)
        .collect::<Result<Vec<_>, _>>()?;
    if rows.is_empty() {
        return Ok(0);
    }
    Ok(Workout::insert_many(rows).exec_without_returning(db).await?)
}

impl DatabaseService {
    pub async fn list_workouts(&self) -> Result<Vec<WorkoutModel>, AppError> {
        Ok(Workout::find().all(&self.database_connection).await?)
    }
}
