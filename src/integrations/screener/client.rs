// src/integrations/screener/client.rs
//
// Resume Screening Service Client
//
// Speaks multipart/form-data over POST: one `job_description` text field,
// one `resume_files` part per selected file. The response is a JSON list of
// scored candidates which is mapped into domain types here.

use crate::domain::{Candidate, JobDescription, ResumeSelection};
use crate::error::AppResult;
use crate::integrations::{error_from_response, ResumeScreener};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const SCREEN_ENDPOINT: &str = "/screen_resumes";

/// Screening runs per-file model scoring on the service side; the bound is
/// generous so large batches still settle instead of hanging the UI.
const REQUEST_TIMEOUT_SECS: u64 = 300;

/// Form field holding the job description text.
const JOB_DESCRIPTION_FIELD: &str = "job_description";

/// Repeated form field name shared by every uploaded file.
const RESUME_FILES_FIELD: &str = "resume_files";

/// One candidate as the service returns it.
#[derive(Debug, Deserialize)]
struct CandidateRecord {
    id: Option<i64>,
    name: Option<String>,
    filename: String,
    score: f64,
    reasoning: String,
    #[serde(default)]
    extracted_skills: Option<Vec<String>>,
}

impl From<CandidateRecord> for Candidate {
    fn from(record: CandidateRecord) -> Self {
        // An empty extracted name is as good as no name.
        let name = record
            .name
            .filter(|name| !name.trim().is_empty());

        Self {
            id: record.id,
            name,
            filename: record.filename,
            score: record.score,
            reasoning: record.reasoning,
            extracted_skills: record.extracted_skills,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ScreenResponseBody {
    #[serde(default)]
    #[allow(dead_code)] // Part of the service response schema
    status: Option<String>,
    candidates: Vec<CandidateRecord>,
}

/// HTTP client for the screening service.
pub struct ScreenerClient {
    base_url: String,
    http_client: Client,
}

impl ScreenerClient {
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            http_client,
        })
    }

    /// Reads every selected file and assembles the multipart payload.
    async fn build_form(
        job_description: &JobDescription,
        selection: &ResumeSelection,
    ) -> AppResult<Form> {
        let mut form = Form::new().text(
            JOB_DESCRIPTION_FIELD,
            job_description.text().to_string(),
        );

        for file in selection.files() {
            let content = tokio::fs::read(file.path()).await?;
            let part = Part::bytes(content)
                .file_name(file.filename().to_string())
                .mime_str(mime_for_filename(file.filename()))?;
            form = form.part(RESUME_FILES_FIELD, part);
        }

        Ok(form)
    }
}

#[async_trait]
impl ResumeScreener for ScreenerClient {
    async fn screen_resumes(
        &self,
        job_description: &JobDescription,
        selection: &ResumeSelection,
    ) -> AppResult<Vec<Candidate>> {
        let url = format!("{}{}", self.base_url, SCREEN_ENDPOINT);
        let form = Self::build_form(job_description, selection).await?;

        debug!(%url, files = selection.len(), "uploading resumes for screening");

        let response = self.http_client.post(&url).multipart(form).send().await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(error_from_response(status, &text));
        }

        let parsed: ScreenResponseBody = serde_json::from_str(&text)?;
        Ok(parsed.candidates.into_iter().map(Candidate::from).collect())
    }
}

fn mime_for_filename(filename: &str) -> &'static str {
    let lower = filename.to_lowercase();
    if lower.ends_with(".pdf") {
        "application/pdf"
    } else if lower.ends_with(".docx") {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    } else if lower.ends_with(".txt") {
        "text/plain"
    } else {
        "application/octet-stream"
    }
}
