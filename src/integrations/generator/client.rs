// src/integrations/generator/client.rs
//
// Job-Description Generation Service Client
//
// Speaks plain JSON over POST. The request carries the seven form fields
// plus the fixed tone; the response carries the generated text.

use crate::domain::JobDescriptionForm;
use crate::error::AppResult;
use crate::integrations::{error_from_response, JobDescriptionGenerator};
use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const GENERATE_ENDPOINT: &str = "/generate_job_description";
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// JSON request body for the generation endpoint.
#[derive(Debug, Serialize)]
struct GenerateRequestBody<'a> {
    job_title: &'a str,
    department: &'a str,
    responsibilities: &'a str,
    skills: &'a str,
    experience: &'a str,
    qualifications: &'a str,
    location: &'a str,
    tone: &'a str,
}

impl<'a> From<&'a JobDescriptionForm> for GenerateRequestBody<'a> {
    fn from(form: &'a JobDescriptionForm) -> Self {
        Self {
            job_title: &form.job_title,
            department: &form.department,
            responsibilities: &form.responsibilities,
            skills: &form.skills,
            experience: &form.experience,
            qualifications: &form.qualifications,
            location: &form.location,
            tone: &form.tone,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponseBody {
    job_description: String,
}

/// HTTP client for the generation service.
pub struct GeneratorClient {
    base_url: String,
    http_client: Client,
}

impl GeneratorClient {
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            http_client,
        })
    }
}

#[async_trait]
impl JobDescriptionGenerator for GeneratorClient {
    async fn generate_job_description(&self, form: &JobDescriptionForm) -> AppResult<String> {
        let url = format!("{}{}", self.base_url, GENERATE_ENDPOINT);
        let body = GenerateRequestBody::from(form);

        debug!(%url, job_title = %form.job_title, "requesting job description");

        let response = self
            .http_client
            .post(&url)
            .header(header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(error_from_response(status, &text));
        }

        let parsed: GenerateResponseBody = serde_json::from_str(&text)?;
        Ok(parsed.job_description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_TONE;

    fn form() -> JobDescriptionForm {
        JobDescriptionForm::new(
            "Data Engineer".to_string(),
            "Platform".to_string(),
            "Own the warehouse".to_string(),
            "SQL, Python".to_string(),
            "5 years".to_string(),
            "MSc".to_string(),
            "Remote".to_string(),
        )
    }

    #[test]
    fn test_client_creation() {
        let client = GeneratorClient::new("http://localhost:5000").unwrap();
        assert_eq!(client.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_request_body_uses_service_field_names() {
        let form = form();
        let body = GenerateRequestBody::from(&form);
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["job_title"], "Data Engineer");
        assert_eq!(value["department"], "Platform");
        assert_eq!(value["responsibilities"], "Own the warehouse");
        assert_eq!(value["skills"], "SQL, Python");
        assert_eq!(value["experience"], "5 years");
        assert_eq!(value["qualifications"], "MSc");
        assert_eq!(value["location"], "Remote");
        assert_eq!(value["tone"], DEFAULT_TONE);
    }

    #[test]
    fn test_response_body_parses_generated_text() {
        let parsed: GenerateResponseBody =
            serde_json::from_str(r#"{"job_description":"We are hiring.\nApply now."}"#).unwrap();
        assert_eq!(parsed.job_description, "We are hiring.\nApply now.");
    }
}
