// src/application/commands/mod.rs
//
// Tauri Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between UI and Services
// - Commands accept DTOs, return DTOs
// - Commands own all session mutation; services stay stateless
// - Every failure lands in the session error banner as a single string

pub mod generation_commands;
pub mod screening_commands;
pub mod session_commands;

pub use generation_commands::*;
pub use screening_commands::*;
pub use session_commands::*;
