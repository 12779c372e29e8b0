//! Aggregator — folds classified requirements into a score and the set of unmet skills.

use std::collections::BTreeSet;

use crate::analysis::models::{AnalysisReport, RequirementAnalysis};

/// Score reported when no requirement line names a known skill.
pub const EMPTY_REQUIREMENTS_SCORE: f64 = 100.0;

/// Builds the report from classified requirements, preserving their order.
///
/// `unmet_skills` only collects skills that directly failed a requirement: the missing
/// skills of each unmet line. Skills missing from a line that still passed are not gaps.
pub fn aggregate(per_requirement: Vec<RequirementAnalysis>) -> AnalysisReport {
    let total_requirements = per_requirement.len();
    let met_count = per_requirement.iter().filter(|r| r.is_met).count();

    let unmet_skills: BTreeSet<String> = per_requirement
        .iter()
        .filter(|r| !r.is_met)
        .flat_map(|r| r.missing_skills().cloned())
        .collect();

    AnalysisReport {
        total_requirements,
        met_count,
        match_score: match_score(met_count, total_requirements),
        unmet_skills,
        per_requirement,
    }
}

/// `met / total × 100`, rounded to two decimal places.
pub fn match_score(met_count: usize, total_requirements: usize) -> f64 {
    if total_requirements == 0 {
        return EMPTY_REQUIREMENTS_SCORE;
    }
    let raw = met_count as f64 / total_requirements as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}
