// src/integrations/mod.rs
//
// External Service Integrations
//
// ARCHITECTURE:
// - One client per HTTP collaborator, behind a trait seam
// - Clients map wire payloads → domain types (NO session mutation)
// - Services depend on the traits, never on the concrete clients

use crate::domain::{Candidate, JobDescription, JobDescriptionForm, ResumeSelection};
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

pub mod generator;
pub mod screener;

pub use generator::client::GeneratorClient;
pub use screener::client::ScreenerClient;

/// Seam over the job-description generation service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobDescriptionGenerator: Send + Sync {
    /// Returns the generated job-description text for the given form.
    async fn generate_job_description(&self, form: &JobDescriptionForm) -> AppResult<String>;
}

/// Seam over the resume screening service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResumeScreener: Send + Sync {
    /// Submits the whole selection against the job description and returns
    /// the scored candidates in service order. The batch is atomic: any
    /// failure fails the entire submission.
    async fn screen_resumes(
        &self,
        job_description: &JobDescription,
        selection: &ResumeSelection,
    ) -> AppResult<Vec<Candidate>>;
}

/// Error body both services use for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    error: Option<String>,
}

/// Maps a non-2xx response to an [`AppError`].
///
/// A parseable `{"error": "..."}` body is surfaced verbatim; anything else
/// becomes an internal error that the banner renders as the generic message.
pub(crate) fn error_from_response(status: StatusCode, body: &str) -> AppError {
    match serde_json::from_str::<ServiceErrorBody>(body) {
        Ok(ServiceErrorBody { error: Some(message) }) if !message.trim().is_empty() => {
            AppError::Service(message)
        }
        _ => AppError::Other(format!("service returned status {}", status)),
    }
}
