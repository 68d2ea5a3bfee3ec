// src/services/generation_service.rs
use std::sync::Arc;

use crate::domain::{validate_job_description_form, JobDescription, JobDescriptionForm};
use crate::error::AppResult;
use crate::integrations::JobDescriptionGenerator;
use tracing::{error, info};
use uuid::Uuid;

/// Orchestrates one job-description generation: validate the form, call the
/// generation service, wrap the returned text.
pub struct GenerationService {
    generator: Arc<dyn JobDescriptionGenerator>,
}

impl GenerationService {
    pub fn new(generator: Arc<dyn JobDescriptionGenerator>) -> Self {
        Self { generator }
    }

    /// Single attempt, no retries; the user resubmits by pressing the
    /// button again. A form that fails validation never reaches the wire.
    pub async fn generate(&self, form: &JobDescriptionForm) -> AppResult<JobDescription> {
        validate_job_description_form(form)?;

        let request_id = Uuid::new_v4();
        info!(%request_id, job_title = %form.job_title, "generating job description");

        let text = self
            .generator
            .generate_job_description(form)
            .await
            .map_err(|error| {
                error!(%request_id, %error, "job description generation failed");
                error
            })?;

        info!(%request_id, chars = text.len(), "job description generated");
        Ok(JobDescription::new(text))
    }
}
