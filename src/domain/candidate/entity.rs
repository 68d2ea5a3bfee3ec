use serde::{Deserialize, Serialize};

/// Shown in place of the skills list when the screening service extracted none.
pub const SKILLS_PLACEHOLDER: &str = "N/A";

/// One scored screening result, as returned by the screening service for a
/// single uploaded resume.
///
/// Optional fields are genuinely optional on the wire: the service sends
/// `null` for a name it could not extract and may omit the skills list
/// entirely. The fallback rules live here rather than in the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Screening-service database id, when the service persisted the resume.
    pub id: Option<i64>,

    /// Extracted candidate name. `None` when extraction failed.
    pub name: Option<String>,

    /// Original filename of the uploaded resume.
    pub filename: String,

    /// Match score as a percentage.
    pub score: f64,

    /// Free-text reasoning from the scoring step, rendered verbatim.
    pub reasoning: String,

    /// Skills the service extracted from the resume, in service order.
    pub extracted_skills: Option<Vec<String>>,
}

impl Candidate {
    /// Name to display: the extracted name, falling back to the filename.
    /// An empty or whitespace-only name counts as absent.
    pub fn display_name(&self) -> &str {
        match &self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.filename,
        }
    }

    /// Score formatted for display, e.g. `80%` or `75.5%`.
    pub fn score_label(&self) -> String {
        format!("{}%", self.score)
    }

    /// Comma-joined skills, or [`SKILLS_PLACEHOLDER`] when absent or empty.
    pub fn skills_summary(&self) -> String {
        match &self.extracted_skills {
            Some(skills) if !skills.is_empty() => skills.join(", "),
            _ => SKILLS_PLACEHOLDER.to_string(),
        }
    }
}
