use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tone requested from the generation service. The form does not expose it;
/// every submission carries this fixed value.
pub const DEFAULT_TONE: &str = "professional";

/// Structured input for the job-description generation service.
/// All seven free-text fields are required before submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDescriptionForm {
    pub job_title: String,
    pub department: String,
    pub responsibilities: String,
    pub skills: String,
    pub experience: String,
    pub qualifications: String,
    pub location: String,

    /// Fixed per submission, see [`DEFAULT_TONE`]
    pub tone: String,
}

impl JobDescriptionForm {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        job_title: String,
        department: String,
        responsibilities: String,
        skills: String,
        experience: String,
        qualifications: String,
        location: String,
    ) -> Self {
        Self {
            job_title,
            department,
            responsibilities,
            skills,
            experience,
            qualifications,
            location,
            tone: DEFAULT_TONE.to_string(),
        }
    }

    /// Field name / value pairs in form order, used by the invariant checks.
    pub fn required_fields(&self) -> [(&'static str, &str); 7] {
        [
            ("Job title", &self.job_title),
            ("Department", &self.department),
            ("Responsibilities", &self.responsibilities),
            ("Skills", &self.skills),
            ("Experience", &self.experience),
            ("Qualifications", &self.qualifications),
            ("Location", &self.location),
        ]
    }
}

/// The generated (or user-provided) job description text.
/// Opaque multi-line content owned by the session once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDescription {
    text: String,
    generated_at: DateTime<Utc>,
}

impl JobDescription {
    pub fn new(text: String) -> Self {
        Self {
            text,
            generated_at: Utc::now(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// A description is usable as a screening precondition only when it has
    /// visible content.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_carries_fixed_tone() {
        let form = JobDescriptionForm::new(
            "Software Engineer".to_string(),
            "Engineering".to_string(),
            "Build things".to_string(),
            "Rust".to_string(),
            "3 years".to_string(),
            "BSc".to_string(),
            "Remote".to_string(),
        );
        assert_eq!(form.tone, DEFAULT_TONE);
    }

    #[test]
    fn test_blank_text_is_empty() {
        assert!(JobDescription::new("  \n ".to_string()).is_empty());
        assert!(!JobDescription::new("We are hiring.".to_string()).is_empty());
    }
}
