// src/services/screening_service.rs
use std::sync::Arc;

use crate::domain::{
    validate_candidate, validate_resume_file, Candidate, JobDescription, ResumeSelection,
};
use crate::error::{AppError, AppResult};
use crate::integrations::ResumeScreener;
use tracing::{error, info, warn};
use uuid::Uuid;

pub const NO_FILES_MESSAGE: &str = "Please select resume files to upload.";
pub const NO_JOB_DESCRIPTION_MESSAGE: &str =
    "Please generate or provide a Job Description first.";

/// Orchestrates one screening submission: explicit input checks, one
/// multipart upload, candidates back in service order.
pub struct ScreeningService {
    screener: Arc<dyn ResumeScreener>,
}

impl ScreeningService {
    pub fn new(screener: Arc<dyn ResumeScreener>) -> Self {
        Self { screener }
    }

    /// Submit-time checks, run before the loading flag is touched.
    /// File check first, then the job-description precondition.
    pub fn validate_inputs(
        job_description: Option<&JobDescription>,
        selection: &ResumeSelection,
    ) -> AppResult<()> {
        if selection.is_empty() {
            return Err(AppError::Validation(NO_FILES_MESSAGE.to_string()));
        }
        match job_description {
            Some(job_description) if !job_description.is_empty() => Ok(()),
            _ => Err(AppError::Validation(NO_JOB_DESCRIPTION_MESSAGE.to_string())),
        }
    }

    /// The batch is atomic: either the whole selection comes back scored or
    /// the submission failed. No per-file partial results, no retries.
    pub async fn screen(
        &self,
        job_description: &JobDescription,
        selection: &ResumeSelection,
    ) -> AppResult<Vec<Candidate>> {
        Self::validate_inputs(Some(job_description), selection)?;

        let request_id = Uuid::new_v4();
        for file in selection.files() {
            validate_resume_file(file)?;
            if !file.has_supported_extension() {
                warn!(
                    %request_id,
                    filename = %file.filename(),
                    "file type outside the picker filter, uploading anyway"
                );
            }
        }

        info!(%request_id, files = selection.len(), "screening resumes");

        let candidates = self
            .screener
            .screen_resumes(job_description, selection)
            .await
            .map_err(|error| {
                error!(%request_id, %error, "resume screening failed");
                error
            })?;

        // Violations are rendered as returned; the list is never filtered.
        for candidate in &candidates {
            if let Err(violation) = validate_candidate(candidate) {
                warn!(
                    %request_id,
                    filename = %candidate.filename,
                    %violation,
                    "candidate violates invariants"
                );
            }
        }

        info!(%request_id, candidates = candidates.len(), "screening complete");
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrations::MockResumeScreener;

    fn job_description() -> JobDescription {
        JobDescription::new("We are hiring a Rust engineer.".to_string())
    }

    fn selection() -> ResumeSelection {
        ResumeSelection::from_paths(["/tmp/a.pdf", "/tmp/b.pdf"])
    }

    fn candidate(filename: &str, score: f64) -> Candidate {
        Candidate {
            id: None,
            name: None,
            filename: filename.to_string(),
            score,
            reasoning: "ok".to_string(),
            extracted_skills: None,
        }
    }

    #[test]
    fn test_empty_selection_is_rejected_first() {
        let error =
            ScreeningService::validate_inputs(Some(&job_description()), &ResumeSelection::default())
                .unwrap_err();
        assert_eq!(error.user_message(), NO_FILES_MESSAGE);
    }

    #[test]
    fn test_missing_job_description_is_rejected() {
        let error = ScreeningService::validate_inputs(None, &selection()).unwrap_err();
        assert_eq!(error.user_message(), NO_JOB_DESCRIPTION_MESSAGE);
    }

    #[test]
    fn test_blank_job_description_is_rejected() {
        let blank = JobDescription::new("   ".to_string());
        let error = ScreeningService::validate_inputs(Some(&blank), &selection()).unwrap_err();
        assert_eq!(error.user_message(), NO_JOB_DESCRIPTION_MESSAGE);
    }

    #[test]
    fn test_valid_inputs_pass() {
        assert!(ScreeningService::validate_inputs(Some(&job_description()), &selection()).is_ok());
    }

    #[tokio::test]
    async fn test_empty_selection_issues_no_service_call() {
        // No expectations registered: any call would panic the test.
        let mock = MockResumeScreener::new();
        let service = ScreeningService::new(Arc::new(mock));

        let error = service
            .screen(&job_description(), &ResumeSelection::default())
            .await
            .unwrap_err();
        assert_eq!(error.user_message(), NO_FILES_MESSAGE);
    }

    #[tokio::test]
    async fn test_candidates_come_back_in_service_order() {
        let mut mock = MockResumeScreener::new();
        mock.expect_screen_resumes().times(1).returning(|_, _| {
            Ok(vec![candidate("b.pdf", 91.0), candidate("a.pdf", 40.5)])
        });
        let service = ScreeningService::new(Arc::new(mock));

        let candidates = service.screen(&job_description(), &selection()).await.unwrap();
        let filenames: Vec<&str> = candidates.iter().map(|c| c.filename.as_str()).collect();
        assert_eq!(filenames, vec!["b.pdf", "a.pdf"]);
    }

    #[tokio::test]
    async fn test_service_error_propagates_verbatim() {
        let mut mock = MockResumeScreener::new();
        mock.expect_screen_resumes()
            .times(1)
            .returning(|_, _| Err(AppError::Service("bad file".to_string())));
        let service = ScreeningService::new(Arc::new(mock));

        let error = service.screen(&job_description(), &selection()).await.unwrap_err();
        assert_eq!(error.user_message(), "bad file");
    }

    #[tokio::test]
    async fn test_invariant_violations_are_kept_in_the_list() {
        let mut mock = MockResumeScreener::new();
        mock.expect_screen_resumes()
            .times(1)
            .returning(|_, _| Ok(vec![candidate("a.pdf", 250.0)]));
        let service = ScreeningService::new(Arc::new(mock));

        let candidates = service.screen(&job_description(), &selection()).await.unwrap();
        assert_eq!(candidates.len(), 1);
    }
}
