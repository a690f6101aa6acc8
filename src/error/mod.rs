//! Unified error handling

use crate::domain::SendReport;
use crate::email::EmailProviderError;
use thiserror::Error;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Email error: {0}")]
    Email(#[from] EmailProviderError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

// Conversion from validation errors
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

// Every failure surfaces to the caller as a JSON failure record on stdout
impl From<AppError> for SendReport {
    fn from(err: AppError) -> Self {
        SendReport::failure(err.to_string())
    }
}
