use crate::db::database_service::DatabaseService;
use crate::types::{error::AppError, user::NewUser};
use entity::user::{Column, Entity as User, Model as UserModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

/// Removes every user with a persisted id. Their activities and memberships cascade.
pub async fn delete_persisted_users<C: ConnectionTrait>(db: &C) -> Result<u64, AppError> {
    let res = User::delete_many()
        .filter(Column::Id.is_not_null())
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}

/// Single insert. A taken email comes back as `AppError::AlreadyExists`.
pub async fn create_user<C: ConnectionTrait>(db: &C, payload: NewUser) -> Result<UserModel, AppError> {
    Ok(payload.build()?.insert(db).await?)
}

pub async fn list_users<C: ConnectionTrait>(db: &C) -> Result<Vec<UserModel>, AppError> {
    Ok(User::find().all(db).await?)
}

pub async fn find_users_by_email<C: ConnectionTrait>(
    db: &C,
    emails: &[&str],
) -> Result<Vec<UserModel>, AppError> {
    Ok(User::find()
        .filter(Column::Email.is_in(emails.iter().copied()))
        .all(db)
        .await?)
}

impl DatabaseService {
    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(Column::Email.eq(email))
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn list_users(&self) -> Result<Vec<UserModel>, AppError> {
        list_users(&self.database_connection).await
    }

    pub async fn delete_user(&self, id: Uuid) -> Result<(), AppError> {
        let res = User::delete_by_id(id)
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("User does not exist".into()));
        }
        Ok(())
    }
}
