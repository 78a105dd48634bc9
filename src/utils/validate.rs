use crate::types::error::AppError;

pub const EMAIL_MAX_LEN: usize = 254;

/// Non-blank label no longer than `max` characters.
pub fn label(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} must not be empty")));
    }
    if value.chars().count() > max {
        return Err(AppError::Validation(format!("{field} is longer than {max} characters")));
    }
    Ok(())
}

pub fn email(value: &str) -> Result<(), AppError> {
    label("email", value, EMAIL_MAX_LEN)?;
    match value.split_once('@') {
        Some((local, domain))
            if !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace) =>
        {
            Ok(())
        }
        _ => Err(AppError::Validation(format!("{value} is not a valid email address"))),
    }
}

pub fn non_negative(field: &str, value: i32) -> Result<(), AppError> {
    if value < 0 {
        return Err(AppError::Validation(format!("{field} must not be negative (got {value})")));
    }
    Ok(())
}
