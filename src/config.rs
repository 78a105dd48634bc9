use std::env;

use crate::types::error::AppError;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub db_url: String,
    pub log_sql: bool,
}

impl EnvConfig {
    fn get_env(key: &str) -> Result<String, AppError> {
        env::var(key).map_err(|_| AppError::Config(format!("Environment variable {key} not set")))
    }

    fn parse_flag(key: &str, raw: Option<String>) -> Result<bool, AppError> {
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(false),
            Some(v) if ["1", "true", "yes", "on"].contains(&v.to_ascii_lowercase().as_str()) => Ok(true),
            Some(v) if ["0", "false", "no", "off"].contains(&v.to_ascii_lowercase().as_str()) => Ok(false),
            Some(v) => Err(AppError::Config(format!("{key} must be a boolean, got {v:?}"))),
        }
    }

    pub fn from_env() -> Result<Self, AppError> {
        dotenv::dotenv().ok();

        let db_url = Self::get_env("DATABASE_URL")?;
        if db_url.trim().is_empty() {
            return Err(AppError::Config("DATABASE_URL is empty".to_string()));
        }

        Ok(EnvConfig {
            db_url,
            log_sql: Self::parse_flag("DB_LOG_SQL", env::var("DB_LOG_SQL").ok())?,
        })
    }
}
