// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

use thiserror::Error;

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod candidate;
pub mod job_description;
pub mod resume;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Job Description Domain
pub use job_description::{
    validate_job_description_form, JobDescription, JobDescriptionForm, DEFAULT_TONE,
};

// Candidate Domain
pub use candidate::{validate_candidate, Candidate, SKILLS_PLACEHOLDER};

// Resume Domain
pub use resume::{validate_resume_file, ResumeFile, ResumeSelection, SUPPORTED_RESUME_EXTENSIONS};

// ============================================================================
// DOMAIN ERRORS
// ============================================================================

#[derive(Debug, Clone, Error)]
pub enum DomainError {
    #[error("{0}")]
    InvariantViolation(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
