use super::entity::ResumeFile;
use crate::domain::{DomainError, DomainResult};

/// Validates all ResumeFile invariants
pub fn validate_resume_file(file: &ResumeFile) -> DomainResult<()> {
    if file.filename().trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Resume filename cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold true for the Resume domain:
///
/// 1. Every selected file carries a non-empty display filename
/// 2. The selection is replaced, never appended to, on re-selection
/// 3. Order of selection is preserved through upload
