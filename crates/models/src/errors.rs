use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("constraint violation: {0}")]
    Constraint(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<DbErr> for ModelError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => Self::Constraint(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::Constraint(msg),
            _ => Self::Db(e.to_string()),
        }
    }
}

/// Reject a required text field that is empty or whitespace only.
pub fn require(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} required")));
    }
    Ok(())
}

/// Reject a text field longer than its column.
pub fn max_len(field: &str, value: &str, len: usize) -> Result<(), ModelError> {
    if value.chars().count() > len {
        return Err(ModelError::Validation(format!("{field} must be at most {len} characters")));
    }
    Ok(())
}
