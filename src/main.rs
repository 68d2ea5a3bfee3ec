// src/main.rs

#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

// Direct imports for the Tauri command handler macro
use talenthub::commands::*;
use talenthub::integrations::{
    GeneratorClient, JobDescriptionGenerator, ResumeScreener, ScreenerClient,
};
use talenthub::{AppState, Config, GenerationService, ScreeningService, SessionHandle};

fn main() -> anyhow::Result<()> {
    // 1. LOGGING
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    // 2. CONFIGURATION
    let config = Config::from_env();

    // 3. INTEGRATION CLIENTS
    // `Arc<dyn Trait>` matches the service constructor signatures exactly.
    let generator: Arc<dyn JobDescriptionGenerator> =
        Arc::new(GeneratorClient::new(&config.generator_url).context("generator client")?);
    let screener: Arc<dyn ResumeScreener> =
        Arc::new(ScreenerClient::new(&config.screener_url).context("screener client")?);

    // 4. SERVICES
    let generation_service = Arc::new(GenerationService::new(generator));
    let screening_service = Arc::new(ScreeningService::new(screener));

    // 5. APPLICATION STATE
    let app_state = AppState {
        session: SessionHandle::new(),
        generation_service,
        screening_service,
    };

    info!("starting TalentHub v{}", env!("CARGO_PKG_VERSION"));

    // 6. TAURI BOOTSTRAP
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            generate_job_description,
            set_job_description,
            select_resume_files,
            supported_resume_extensions,
            screen_resumes,
            get_session_snapshot,
        ])
        .run(tauri::generate_context!())?;

    Ok(())
}
