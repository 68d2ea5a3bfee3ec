pub mod entity;
pub mod invariants;

pub use entity::{JobDescription, JobDescriptionForm, DEFAULT_TONE};
pub use invariants::validate_job_description_form;
