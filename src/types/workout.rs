use entity::workout::ActiveModel as WorkoutActive;
use sea_orm::Set;

use crate::types::error::AppError;
use crate::utils::{id::new_id, validate};

pub const NAME_MAX_LEN: usize = 100;
pub const DIFFICULTY_MAX_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkout {
    pub name: String,
    pub description: String,
    pub difficulty: String,
}

impl NewWorkout {
    pub fn new(name: &str, description: &str, difficulty: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            difficulty: difficulty.to_string(),
        }
    }

    pub fn build(self) -> Result<WorkoutActive, AppError> {
        validate::label("workout name", &self.name, NAME_MAX_LEN)?;
        validate::label("difficulty", &self.difficulty, DIFFICULTY_MAX_LEN)?;
        Ok(WorkoutActive {
            id: Set(new_id()),
            name: Set(self.name),
            description: Set(self.description),
            difficulty: Set(self.difficulty),
        })
    }
}
