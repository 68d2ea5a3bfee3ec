// src/application/views.rs
//
// Results List rendering model: a pure function from the candidate list to
// display rows. No sorting, no filtering, no pagination.

use crate::domain::Candidate;
use serde::{Deserialize, Serialize};

/// One rendered entry of the results list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRow {
    /// 1-based position; drives the decorative index icon in the webview.
    pub rank: usize,
    pub display_name: String,
    pub score_label: String,
    pub reasoning: String,
    pub skills_summary: String,
}

/// Maps candidates to rows in the order received. Pure: the same input
/// always produces the same output, and an empty list renders nothing.
pub fn candidate_rows(candidates: &[Candidate]) -> Vec<CandidateRow> {
    candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| CandidateRow {
            rank: index + 1,
            display_name: candidate.display_name().to_string(),
            score_label: candidate.score_label(),
            reasoning: candidate.reasoning.clone(),
            skills_summary: candidate.skills_summary(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(filename: &str, score: f64) -> Candidate {
        Candidate {
            id: None,
            name: None,
            filename: filename.to_string(),
            score,
            reasoning: "ok".to_string(),
            extracted_skills: None,
        }
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        assert!(candidate_rows(&[]).is_empty());
    }

    #[test]
    fn test_single_candidate_row() {
        let rows = candidate_rows(&[candidate("a.pdf", 80.0)]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].display_name, "a.pdf");
        assert_eq!(rows[0].score_label, "80%");
        assert_eq!(rows[0].reasoning, "ok");
        assert_eq!(rows[0].skills_summary, "N/A");
    }

    #[test]
    fn test_order_received_is_preserved() {
        let candidates = vec![candidate("low.pdf", 10.0), candidate("high.pdf", 95.0)];
        let rows = candidate_rows(&candidates);

        assert_eq!(rows[0].display_name, "low.pdf");
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[1].display_name, "high.pdf");
        assert_eq!(rows[1].rank, 2);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let candidates = vec![candidate("a.pdf", 80.0), candidate("b.pdf", 60.5)];
        assert_eq!(candidate_rows(&candidates), candidate_rows(&candidates));
    }
}
