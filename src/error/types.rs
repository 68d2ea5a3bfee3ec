// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Fallback banner text for failures that carry no user-presentable message.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Error text reported by an external service in its response body.
    #[error("{0}")]
    Service(String),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Another request is already in progress.")]
    Busy,

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    /// Message shown in the UI error banner.
    ///
    /// Precedence: client-side validation and server-reported text verbatim,
    /// then the transport layer's own message, then the generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(message) => message.clone(),
            AppError::Domain(error) => error.to_string(),
            AppError::Service(message) => message.clone(),
            AppError::Busy => self.to_string(),
            AppError::Transport(error) => error.to_string(),
            AppError::Serialization(error) => error.to_string(),
            AppError::Io(error) => error.to_string(),
            AppError::Other(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_verbatim() {
        let error = AppError::Validation("Please select resume files to upload.".to_string());
        assert_eq!(error.user_message(), "Please select resume files to upload.");
    }

    #[test]
    fn test_service_message_is_verbatim() {
        let error = AppError::Service("bad file".to_string());
        assert_eq!(error.user_message(), "bad file");
    }

    #[test]
    fn test_domain_message_is_verbatim() {
        let error = AppError::Domain(DomainError::InvariantViolation(
            "Job title is required.".to_string(),
        ));
        assert_eq!(error.user_message(), "Job title is required.");
    }

    #[test]
    fn test_other_falls_back_to_generic_message() {
        let error = AppError::Other("service returned status 502".to_string());
        assert_eq!(error.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_busy_message() {
        assert_eq!(
            AppError::Busy.user_message(),
            "Another request is already in progress."
        );
    }

    #[test]
    fn test_serializes_as_display_string() {
        let error = AppError::Service("bad file".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, "\"bad file\"");
    }
}
