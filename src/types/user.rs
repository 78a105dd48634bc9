use entity::user::ActiveModel as UserActive;
use sea_orm::Set;

use crate::types::error::AppError;
use crate::utils::{id::new_id, validate};

pub const NAME_MAX_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub age: i32,
}

impl NewUser {
    pub fn new(email: &str, name: &str, age: i32) -> Self {
        Self { email: email.to_string(), name: name.to_string(), age }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate::email(&self.email)?;
        validate::label("user name", &self.name, NAME_MAX_LEN)
    }

    /// Validated row with a fresh id, ready for `insert`/`insert_many`.
    pub fn build(self) -> Result<UserActive, AppError> {
        self.validate()?;
        Ok(UserActive {
            id: Set(new_id()),
            email: Set(self.email),
            name: Set(self.name),
            age: Set(self.age),
        })
    }
}
