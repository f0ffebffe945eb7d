use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

use crate::validation::format_validation_errors;

/// Failure of a domain operation.
///
/// Each variant maps onto one HTTP status in the API layer. The `String`
/// payloads are client-facing messages; `Database` is not.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        ServiceError::Validation(format_validation_errors(&errors))
    }
}
