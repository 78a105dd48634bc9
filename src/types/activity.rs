use chrono::NaiveDate;
use entity::activity::ActiveModel as ActivityActive;
use sea_orm::Set;
use uuid::Uuid;

use crate::types::error::AppError;
use crate::utils::{id::new_id, validate};

pub const TYPE_MAX_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActivity {
    pub user_id: Uuid,
    pub activity_type: String,
    /// Minutes.
    pub duration: i32,
    pub date: NaiveDate,
}

impl NewActivity {
    pub fn new(user_id: Uuid, activity_type: &str, duration: i32, date: NaiveDate) -> Self {
        Self { user_id, activity_type: activity_type.to_string(), duration, date }
    }

    pub fn build(self) -> Result<ActivityActive, AppError> {
        validate::label("activity type", &self.activity_type, TYPE_MAX_LEN)?;
        validate::non_negative("duration", self.duration)?;
        Ok(ActivityActive {
            id: Set(new_id()),
            user_id: Set(self.user_id),
            activity_type: Set(self.activity_type),
            duration: Set(self.duration),
            date: Set(self.date),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 8).unwrap()
    }

    #[test]
    fn zero_minutes_is_fine() {
        assert!(NewActivity::new(new_id(), "Cycling", 0, day()).build().is_ok());
    }

    #[test]
    fn negative_duration_is_rejected() {
        let err = NewActivity::new(new_id(), "Cycling", -5, day()).build().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
