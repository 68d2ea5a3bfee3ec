// src/application/session.rs
//
// Shared Session State (the cross-form coordinator)
//
// ARCHITECTURE:
// - One shared state object; setters are the only mutation entry points
// - Forms never see each other, only this session
// - The loading flag is a scoped resource: acquired by begin_request,
//   released by LoadingGuard::drop on every exit path

use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::{Candidate, JobDescription, ResumeSelection};
use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Progress of the screener form's current submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningStatus {
    #[default]
    Idle,
    Uploading,
    Complete,
}

impl ScreeningStatus {
    /// Status line shown under the screener form.
    pub fn message(&self) -> &'static str {
        match self {
            ScreeningStatus::Idle => "",
            ScreeningStatus::Uploading => "Uploading resumes and screening...",
            ScreeningStatus::Complete => "Screening complete.",
        }
    }
}

/// The four coordinator-owned values plus the screener form's local state.
#[derive(Debug, Default)]
struct Session {
    job_description: Option<JobDescription>,
    candidates: Vec<Candidate>,
    loading: bool,
    error: Option<String>,
    resume_selection: ResumeSelection,
    screening_status: ScreeningStatus,
}

/// Owned copy of the session for rendering. Reads never hold the lock
/// across an await point.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub job_description: Option<JobDescription>,
    pub candidates: Vec<Candidate>,
    pub loading: bool,
    pub error: Option<String>,
    pub resume_selection: ResumeSelection,
    pub screening_status: ScreeningStatus,
}

/// Thread-safe handle to the session, shared across commands.
#[derive(Clone, Default)]
pub struct SessionHandle {
    inner: Arc<Mutex<Session>>,
}

impl SessionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        self.inner.lock().unwrap()
    }

    /// Acquires the loading state for one submission: clears any existing
    /// error, raises the loading flag, and hands back the guard that lowers
    /// it again. Fails with [`AppError::Busy`] while another submission is
    /// in flight.
    pub fn begin_request(&self) -> AppResult<LoadingGuard> {
        let mut session = self.lock();
        if session.loading {
            return Err(AppError::Busy);
        }
        session.loading = true;
        session.error = None;
        Ok(LoadingGuard {
            session: Arc::clone(&self.inner),
        })
    }

    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    pub fn set_job_description(&self, job_description: JobDescription) {
        self.lock().job_description = Some(job_description);
    }

    pub fn job_description(&self) -> Option<JobDescription> {
        self.lock().job_description.clone()
    }

    /// The screener form renders only when a usable job description exists.
    pub fn screener_enabled(&self) -> bool {
        self.lock()
            .job_description
            .as_ref()
            .map(|job_description| !job_description.is_empty())
            .unwrap_or(false)
    }

    /// Replaces the whole candidate list. Only successful screening calls
    /// reach this; failures leave the previous list in place.
    pub fn set_candidates(&self, candidates: Vec<Candidate>) {
        self.lock().candidates = candidates;
    }

    pub fn candidates(&self) -> Vec<Candidate> {
        self.lock().candidates.clone()
    }

    pub fn set_error(&self, message: impl Into<String>) {
        self.lock().error = Some(message.into());
    }

    pub fn clear_error(&self) {
        self.lock().error = None;
    }

    pub fn error(&self) -> Option<String> {
        self.lock().error.clone()
    }

    /// Replaces the selection wholesale; re-selection never appends.
    pub fn set_resume_selection(&self, selection: ResumeSelection) {
        self.lock().resume_selection = selection;
    }

    pub fn resume_selection(&self) -> ResumeSelection {
        self.lock().resume_selection.clone()
    }

    pub fn set_screening_status(&self, status: ScreeningStatus) {
        self.lock().screening_status = status;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let session = self.lock();
        SessionSnapshot {
            job_description: session.job_description.clone(),
            candidates: session.candidates.clone(),
            loading: session.loading,
            error: session.error.clone(),
            resume_selection: session.resume_selection.clone(),
            screening_status: session.screening_status,
        }
    }
}

/// Scoped loading flag. Dropping the guard lowers the flag, so every exit
/// path of a submission (success, server error, transport error, panic)
/// settles the UI.
#[derive(Debug)]
pub struct LoadingGuard {
    session: Arc<Mutex<Session>>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        // The flag must come down even if a panicking holder poisoned the lock.
        let mut session = match self.session.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        session.loading = false;
    }
}
