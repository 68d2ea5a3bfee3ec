pub mod entity;
pub mod invariants;

pub use entity::{ResumeFile, ResumeSelection, SUPPORTED_RESUME_EXTENSIONS};
pub use invariants::validate_resume_file;
