// src/application/state.rs

use std::sync::Arc;

use crate::application::session::SessionHandle;
use crate::services::{GenerationService, ScreeningService};

/// Application state managed by Tauri.
/// Services are initialized in main.rs and passed here; the session is the
/// only mutable piece and is internally synchronized.
pub struct AppState {
    pub session: SessionHandle,
    pub generation_service: Arc<GenerationService>,
    pub screening_service: Arc<ScreeningService>,
}
