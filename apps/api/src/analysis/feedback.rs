//! Feedback Composer — maps a match score into a status band with a short personalised message.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Used when the document does not open with a recognisable name.
pub const FALLBACK_CANDIDATE_NAME: &str = "Candidate";

static LEADING_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z][a-z]+ [A-Z][a-z]+)").expect("static regex is valid"));

/// Qualitative band derived purely from the match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStatus {
    /// score ≥ 75
    Great,
    /// 50 ≤ score < 75
    Good,
    /// 25 ≤ score < 50
    Ok,
    /// score < 25
    Improvement,
}

impl FeedbackStatus {
    pub fn from_score(score: f64) -> Self {
        if score >= 75.0 {
            FeedbackStatus::Great
        } else if score >= 50.0 {
            FeedbackStatus::Good
        } else if score >= 25.0 {
            FeedbackStatus::Ok
        } else {
            FeedbackStatus::Improvement
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub status: FeedbackStatus,
    pub message: String,
}

/// Composes the feedback message for `score`, addressing the candidate by first name.
pub fn compose_feedback(score: f64, candidate_name: &str) -> Feedback {
    let first_name = candidate_name
        .split(' ')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(FALLBACK_CANDIDATE_NAME);

    let status = FeedbackStatus::from_score(score);
    let message = match status {
        FeedbackStatus::Great => format!(
            "Excellent work, {first_name}! Your profile is a strong match for this role's requirements. \
             Focus on the few unmet areas to become an ideal candidate."
        ),
        FeedbackStatus::Good => format!(
            "Solid foundation, {first_name}. You meet a good number of the requirements. \
             Addressing the key unmet skills will significantly boost your profile."
        ),
        FeedbackStatus::Ok => format!(
            "Good start, {first_name}. You meet some requirements, but there are several key areas to focus on. \
             Use this detailed breakdown to bridge the gaps."
        ),
        FeedbackStatus::Improvement => format!(
            "Hey {first_name}, this analysis has identified some foundational gaps. \
             The list below is your roadmap to becoming a much stronger candidate for this type of role."
        ),
    };

    Feedback { status, message }
}

/// Returns the candidate's name when the document opens with two capitalised words
/// ("Jane Doe ..."), otherwise [`FALLBACK_CANDIDATE_NAME`].
pub fn extract_candidate_name(document: &str) -> String {
    LEADING_NAME
        .captures(document.trim())
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| FALLBACK_CANDIDATE_NAME.to_string())
}
