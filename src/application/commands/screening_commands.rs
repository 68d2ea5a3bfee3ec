// src/application/commands/screening_commands.rs

use tauri::State;
use tracing::{debug, error};

use crate::application::dto::{CandidateDto, ResumeFileDto};
use crate::application::session::ScreeningStatus;
use crate::application::state::AppState;
use crate::domain::{ResumeSelection, SUPPORTED_RESUME_EXTENSIONS};
use crate::services::{ScreeningService, NO_JOB_DESCRIPTION_MESSAGE};

/// Replaces the current resume selection with the picker result.
#[tauri::command]
pub async fn select_resume_files(
    paths: Vec<String>,
    state: State<'_, AppState>,
) -> Result<Vec<ResumeFileDto>, String> {
    let selection = ResumeSelection::from_paths(paths);
    debug!(files = selection.len(), "resume selection replaced");

    let dtos = selection.files().iter().map(ResumeFileDto::from).collect();
    state.session.set_resume_selection(selection);
    Ok(dtos)
}

/// Extensions offered to the file picker as a filter hint.
#[tauri::command]
pub fn supported_resume_extensions() -> Vec<String> {
    SUPPORTED_RESUME_EXTENSIONS
        .iter()
        .map(|extension| extension.to_string())
        .collect()
}

/// Submits the current selection against the current job description.
///
/// Validation runs before the loading flag is touched: an empty selection
/// or missing job description surfaces its message and never reaches the
/// wire. A successful call replaces the whole candidate list; a failed one
/// leaves the previous list in place.
#[tauri::command]
pub async fn screen_resumes(state: State<'_, AppState>) -> Result<Vec<CandidateDto>, String> {
    let job_description = state.session.job_description();
    let selection = state.session.resume_selection();

    if let Err(invalid) =
        ScreeningService::validate_inputs(job_description.as_ref(), &selection)
    {
        let message = invalid.user_message();
        state.session.set_error(message.clone());
        return Err(message);
    }
    let Some(job_description) = job_description else {
        return Err(NO_JOB_DESCRIPTION_MESSAGE.to_string());
    };

    let _guard = match state.session.begin_request() {
        Ok(guard) => guard,
        Err(busy) => return Err(busy.user_message()),
    };
    state.session.set_screening_status(ScreeningStatus::Uploading);

    match state
        .screening_service
        .screen(&job_description, &selection)
        .await
    {
        Ok(candidates) => {
            state.session.set_candidates(candidates.clone());
            state.session.set_screening_status(ScreeningStatus::Complete);
            Ok(candidates.into_iter().map(CandidateDto::from).collect())
        }
        Err(cause) => {
            // Status stays at Uploading; prior candidates stay in place.
            let message = cause.user_message();
            error!(%cause, "screen_resumes failed");
            state.session.set_error(message.clone());
            Err(message)
        }
    }
}
