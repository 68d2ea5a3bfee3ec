// src/services/mod.rs
//
// Application Services
//
// Services validate inputs and orchestrate the integration clients. They
// never touch the session; commands own all state mutation.

pub mod generation_service;
pub mod screening_service;

pub use generation_service::GenerationService;
pub use screening_service::{
    ScreeningService, NO_FILES_MESSAGE, NO_JOB_DESCRIPTION_MESSAGE,
};
