use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Which rule decided whether a requirement line is satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Every required skill must appear in the document.
    All,
    /// One required skill appearing in the document is enough.
    Any,
}

/// Classification of a single requirement line that names at least one known skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementAnalysis {
    pub requirement: String,
    pub required_skills: BTreeSet<String>,
    /// Always a subset of `required_skills`.
    pub met_skills: BTreeSet<String>,
    pub condition: Condition,
    pub is_met: bool,
}

impl RequirementAnalysis {
    /// Required skills absent from the document.
    pub fn missing_skills(&self) -> impl Iterator<Item = &String> {
        self.required_skills.difference(&self.met_skills)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub total_requirements: usize,
    pub met_count: usize,
    /// 0–100, two decimal places. Exactly 100 when there are no requirements.
    pub match_score: f64,
    pub unmet_skills: BTreeSet<String>,
    /// In document order.
    pub per_requirement: Vec<RequirementAnalysis>,
}

impl AnalysisReport {
    pub fn met_requirements(&self) -> impl Iterator<Item = &RequirementAnalysis> {
        self.per_requirement.iter().filter(|r| r.is_met)
    }

    pub fn unmet_requirements(&self) -> impl Iterator<Item = &RequirementAnalysis> {
        self.per_requirement.iter().filter(|r| !r.is_met)
    }
}
