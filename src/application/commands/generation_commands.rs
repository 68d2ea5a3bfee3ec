// src/application/commands/generation_commands.rs

use tauri::State;
use tracing::error;

use crate::application::dto::{GenerateJobDescriptionDto, JobDescriptionDto};
use crate::application::state::AppState;
use crate::domain::JobDescriptionForm;

/// Submits the seven-field form to the generation service.
///
/// The loading flag goes up before the call and comes down when the guard
/// drops, on every path. On failure the previous job description (if any)
/// stays in place; only the banner changes.
#[tauri::command]
pub async fn generate_job_description(
    dto: GenerateJobDescriptionDto,
    state: State<'_, AppState>,
) -> Result<JobDescriptionDto, String> {
    let form = JobDescriptionForm::from(dto);

    let _guard = match state.session.begin_request() {
        Ok(guard) => guard,
        // A rejected overlap must not clobber the in-flight request's banner.
        Err(busy) => return Err(busy.user_message()),
    };

    match state.generation_service.generate(&form).await {
        Ok(job_description) => {
            state.session.set_job_description(job_description.clone());
            Ok(JobDescriptionDto::from(job_description))
        }
        Err(cause) => {
            let message = cause.user_message();
            error!(%cause, "generate_job_description failed");
            state.session.set_error(message.clone());
            Err(message)
        }
    }
}
