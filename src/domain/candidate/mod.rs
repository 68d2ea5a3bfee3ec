pub mod entity;
pub mod invariants;

pub use entity::{Candidate, SKILLS_PLACEHOLDER};
pub use invariants::validate_candidate;
