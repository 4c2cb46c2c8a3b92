use sea_orm::DbErr;
use thiserror::Error;

/// Failures raised by entity helpers: bad field values or the database itself.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<DbErr> for ModelError {
    fn from(err: DbErr) -> Self {
        Self::Db(err.to_string())
    }
}
