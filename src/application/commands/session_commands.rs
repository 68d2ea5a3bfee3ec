// src/application/commands/session_commands.rs

use tauri::State;

use crate::application::dto::{JobDescriptionDto, SessionSnapshotDto};
use crate::application::state::AppState;
use crate::domain::JobDescription;

/// Full render state for the webview; polled after every command and on
/// window focus.
#[tauri::command]
pub async fn get_session_snapshot(
    state: State<'_, AppState>,
) -> Result<SessionSnapshotDto, String> {
    Ok(SessionSnapshotDto::from(state.session.snapshot()))
}

/// The "provide" path: stores user-supplied job description text without
/// calling the generation service.
#[tauri::command]
pub async fn set_job_description(
    text: String,
    state: State<'_, AppState>,
) -> Result<JobDescriptionDto, String> {
    if text.trim().is_empty() {
        let message = "Job description cannot be empty.".to_string();
        state.session.set_error(message.clone());
        return Err(message);
    }

    let job_description = JobDescription::new(text);
    state.session.set_job_description(job_description.clone());
    // A stale "generate one first" banner is obsolete once text exists.
    state.session.clear_error();
    Ok(JobDescriptionDto::from(job_description))
}
