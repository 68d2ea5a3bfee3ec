use super::entity::JobDescriptionForm;
use crate::domain::{DomainError, DomainResult};

/// Validates all JobDescriptionForm invariants
/// The webview marks every input `required`; this is the authoritative check.
pub fn validate_job_description_form(form: &JobDescriptionForm) -> DomainResult<()> {
    for (label, value) in form.required_fields() {
        validate_required_field(label, value)?;
    }
    Ok(())
}

fn validate_required_field(label: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::InvariantViolation(format!(
            "{} is required.",
            label
        )));
    }
    Ok(())
}

/// Invariants that must hold true for the JobDescriptionForm domain:
///
/// 1. All seven free-text fields are non-empty after trimming
/// 2. Tone is always present (fixed per submission, never user-supplied)
/// 3. A form that fails validation never reaches the generation service

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> JobDescriptionForm {
        JobDescriptionForm::new(
            "Software Engineer".to_string(),
            "Engineering".to_string(),
            "Design and ship backend services".to_string(),
            "Rust, SQL".to_string(),
            "3+ years".to_string(),
            "BSc Computer Science".to_string(),
            "Berlin".to_string(),
        )
    }

    #[test]
    fn test_valid_form() {
        assert!(validate_job_description_form(&valid_form()).is_ok());
    }

    #[test]
    fn test_each_empty_field_fails() {
        let blank_one = |index: usize| {
            let mut form = valid_form();
            match index {
                0 => form.job_title = String::new(),
                1 => form.department = String::new(),
                2 => form.responsibilities = String::new(),
                3 => form.skills = String::new(),
                4 => form.experience = String::new(),
                5 => form.qualifications = String::new(),
                _ => form.location = String::new(),
            }
            form
        };

        for index in 0..7 {
            let form = blank_one(index);
            assert!(
                validate_job_description_form(&form).is_err(),
                "field {} should be required",
                index
            );
        }
    }

    #[test]
    fn test_whitespace_only_field_fails() {
        let mut form = valid_form();
        form.location = "   ".to_string();
        let error = validate_job_description_form(&form).unwrap_err();
        assert_eq!(error.to_string(), "Location is required.");
    }
}
