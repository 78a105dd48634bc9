use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // input problems
    #[error("configuration error: {0}")]
    Config(String),
    #[error("validation error: {0}")]
    Validation(String),

    // storage outcomes
    #[error("already exists")]
    AlreadyExists,
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Db(DbErr),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Db(_) => "DB_ERROR",
        }
    }

    fn from_db(err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
            return AppError::AlreadyExists;
        }
        match err {
            DbErr::RecordNotFound(what) => AppError::NotFound(what),
            other => AppError::Db(other),
        }
    }
}
