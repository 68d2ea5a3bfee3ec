// src/lib.rs
// TalentHub - AI-powered HR assistant
//
// Architecture:
// - Domain-centric: entities and their invariants live in domains
// - Explicit state: one shared session, setters as the only mutation path
// - Application Layer: the Tauri command boundary
// - Integrations: one client per external HTTP service, behind trait seams

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod domain;
pub mod error;
pub mod integrations;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_candidate,
    validate_job_description_form,
    validate_resume_file,
    Candidate,
    JobDescription,
    JobDescriptionForm,
    ResumeFile,
    ResumeSelection,
    DEFAULT_TONE,
    SKILLS_PLACEHOLDER,
    SUPPORTED_RESUME_EXTENSIONS,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult, GENERIC_ERROR_MESSAGE};

// ============================================================================
// PUBLIC API - Configuration
// ============================================================================

pub use config::Config;

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{
    GeneratorClient, JobDescriptionGenerator, ResumeScreener, ScreenerClient,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    GenerationService, ScreeningService, NO_FILES_MESSAGE, NO_JOB_DESCRIPTION_MESSAGE,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::state::AppState;
pub use application::{
    candidate_rows, CandidateRow, LoadingGuard, ScreeningStatus, SessionHandle, SessionSnapshot,
};

// Re-export application submodules
pub use application::commands;
pub use application::dto;
