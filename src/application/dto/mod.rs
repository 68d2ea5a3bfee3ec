// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs NEVER leak domain invariants
// - DTOs are simple, serializable structs

use serde::{Deserialize, Serialize};

use crate::application::session::SessionSnapshot;
use crate::application::views::{candidate_rows, CandidateRow};
use crate::domain::{Candidate, JobDescription, JobDescriptionForm, ResumeFile};

// ============================================================================
// JOB DESCRIPTION DTOs
// ============================================================================

/// The seven form fields as submitted by the webview. The tone is fixed on
/// the Rust side and never part of the form payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateJobDescriptionDto {
    pub job_title: String,
    pub department: String,
    pub responsibilities: String,
    pub skills: String,
    pub experience: String,
    pub qualifications: String,
    pub location: String,
}

impl From<GenerateJobDescriptionDto> for JobDescriptionForm {
    fn from(dto: GenerateJobDescriptionDto) -> Self {
        JobDescriptionForm::new(
            dto.job_title,
            dto.department,
            dto.responsibilities,
            dto.skills,
            dto.experience,
            dto.qualifications,
            dto.location,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDescriptionDto {
    pub text: String,
    pub generated_at: String,
}

impl From<JobDescription> for JobDescriptionDto {
    fn from(job_description: JobDescription) -> Self {
        Self {
            text: job_description.text().to_string(),
            generated_at: job_description.generated_at().to_rfc3339(),
        }
    }
}

// ============================================================================
// SCREENING DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeFileDto {
    pub path: String,
    pub filename: String,
}

impl From<&ResumeFile> for ResumeFileDto {
    fn from(file: &ResumeFile) -> Self {
        Self {
            path: file.path().to_string_lossy().to_string(),
            filename: file.filename().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateDto {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub filename: String,
    pub score: f64,
    pub reasoning: String,
    pub extracted_skills: Option<Vec<String>>,
}

impl From<Candidate> for CandidateDto {
    fn from(candidate: Candidate) -> Self {
        Self {
            id: candidate.id,
            name: candidate.name,
            filename: candidate.filename,
            score: candidate.score,
            reasoning: candidate.reasoning,
            extracted_skills: candidate.extracted_skills,
        }
    }
}

// ============================================================================
// SESSION DTOs
// ============================================================================

/// Everything the three UI sections render, in one payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshotDto {
    pub job_description: Option<JobDescriptionDto>,
    pub screener_enabled: bool,
    pub selected_files: Vec<ResumeFileDto>,
    pub screening_status: String,
    pub candidates: Vec<CandidateDto>,
    pub candidate_rows: Vec<CandidateRow>,
    pub loading: bool,
    pub error: Option<String>,
}

impl From<SessionSnapshot> for SessionSnapshotDto {
    fn from(snapshot: SessionSnapshot) -> Self {
        let screener_enabled = snapshot
            .job_description
            .as_ref()
            .map(|job_description| !job_description.is_empty())
            .unwrap_or(false);

        Self {
            job_description: snapshot.job_description.map(JobDescriptionDto::from),
            screener_enabled,
            selected_files: snapshot
                .resume_selection
                .files()
                .iter()
                .map(ResumeFileDto::from)
                .collect(),
            screening_status: snapshot.screening_status.message().to_string(),
            candidate_rows: candidate_rows(&snapshot.candidates),
            candidates: snapshot.candidates.into_iter().map(CandidateDto::from).collect(),
            loading: snapshot.loading,
            error: snapshot.error,
        }
    }
}
