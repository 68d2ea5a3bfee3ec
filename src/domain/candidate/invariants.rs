use super::entity::Candidate;
use crate::domain::{DomainError, DomainResult};

/// Validates all Candidate invariants
///
/// Service responses are not rejected over these: a violating candidate is
/// still rendered in order, but the violation is logged by the caller.
pub fn validate_candidate(candidate: &Candidate) -> DomainResult<()> {
    validate_filename(&candidate.filename)?;
    validate_score(candidate.score)?;
    Ok(())
}

fn validate_filename(filename: &str) -> DomainResult<()> {
    if filename.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Candidate filename cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Scores are percentages; anything non-finite or outside 0..=100 means the
/// scoring step misbehaved.
fn validate_score(score: f64) -> DomainResult<()> {
    if !score.is_finite() || !(0.0..=100.0).contains(&score) {
        return Err(DomainError::InvariantViolation(format!(
            "Candidate score {} is not a percentage",
            score
        )));
    }
    Ok(())
}

/// Invariants that must hold true for the Candidate domain:
///
/// 1. Filename is never empty (every candidate came from an uploaded file)
/// 2. Score is a finite percentage in 0..=100
/// 3. Name and skills are genuinely optional
/// 4. Candidates are kept in the order the service returned them

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> Candidate {
        Candidate {
            id: None,
            name: None,
            filename: "resume.pdf".to_string(),
            score: 64.25,
            reasoning: "Partial overlap.".to_string(),
            extracted_skills: None,
        }
    }

    #[test]
    fn test_valid_candidate() {
        assert!(validate_candidate(&candidate()).is_ok());
    }

    #[test]
    fn test_empty_filename_fails() {
        let mut c = candidate();
        c.filename = "  ".to_string();
        assert!(validate_candidate(&c).is_err());
    }

    #[test]
    fn test_out_of_range_score_fails() {
        let mut c = candidate();
        c.score = 180.0;
        assert!(validate_candidate(&c).is_err());

        c.score = f64::NAN;
        assert!(validate_candidate(&c).is_err());
    }
}
