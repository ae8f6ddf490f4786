//! Error type shared by every domain service.
//!
//! Each variant maps to one HTTP status in the REST layer. Storage faults
//! arrive as `anyhow::Error` and become [`ServiceError::Unexpected`]; their
//! details are logged but never sent to clients.

use crate::domain::models::user::{LoginError, RegistrationError};

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Input failed validation (400)
    #[error("{0}")]
    Validation(String),

    /// The write conflicts with existing data (400)
    #[error("{0}")]
    Conflict(String),

    /// No record with the requested ID (404)
    #[error("{0}")]
    NotFound(String),

    /// Login rejected (400)
    #[error("{0}")]
    Auth(String),

    /// Missing or invalid bearer token (401)
    #[error("{0}")]
    Unauthorized(String),

    /// Storage or other internal failure (500)
    #[error("Server error")]
    Unexpected(#[from] anyhow::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn not_found(entity: &str) -> Self {
        ServiceError::NotFound(format!("{} not found", entity))
    }
}

impl From<RegistrationError> for ServiceError {
    fn from(error: RegistrationError) -> Self {
        match error {
            RegistrationError::MissingFields => ServiceError::Validation(error.to_string()),
            RegistrationError::EmailTaken => ServiceError::Conflict(error.to_string()),
        }
    }
}

impl From<LoginError> for ServiceError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::MissingFields => ServiceError::Validation(error.to_string()),
            LoginError::UnknownEmail | LoginError::WrongPassword => ServiceError::Auth(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_hides_cause() {
        let error: ServiceError = anyhow::anyhow!("disk I/O error").into();
        assert_eq!(error.to_string(), "Server error");
    }

    #[test]
    fn test_login_errors_keep_messages() {
        let error: ServiceError = LoginError::UnknownEmail.into();
        assert!(matches!(error, ServiceError::Auth(ref m) if m == "User not found"));

        let error: ServiceError = RegistrationError::EmailTaken.into();
        assert!(matches!(error, ServiceError::Conflict(ref m) if m == "User already exists"));
    }
}
