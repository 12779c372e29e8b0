//! Requirement Classifier — decides which skills a requirement line names, which of them the
//! candidate's document covers, and whether the line's implicit AND/OR condition holds.
//!
//! Condition inference is a fixed decision table over connectives, not a grammar:
//!
//! | conjunctive (`and`, `&`) | disjunctive (`,` `/` `or`, or > 2 skills) | rule |
//! |--------------------------|-------------------------------------------|------|
//! | yes                      | no                                        | All  |
//! | yes                      | yes                                       | Any  |
//! | no                       | any                                       | Any  |

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::models::{Condition, RequirementAnalysis};
use crate::ontology::SkillOntology;

static AND_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\band\b").expect("static regex is valid"));
static OR_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bor\b").expect("static regex is valid"));

/// A line naming more skills than this reads as a menu of options.
const MAX_CONJUNCTIVE_SKILLS: usize = 2;

/// Classifies one requirement line against the candidate's document.
///
/// Returns `None` when the line names no known skill; such lines carry no actionable
/// requirement and are excluded from aggregation.
pub fn classify_requirement(
    requirement: &str,
    document: &str,
    ontology: &SkillOntology,
) -> Option<RequirementAnalysis> {
    let required_skills = ontology.skills_in(requirement);
    if required_skills.is_empty() {
        return None;
    }

    let met_skills: BTreeSet<String> = required_skills
        .iter()
        .filter(|skill| ontology.mentions(skill, document))
        .cloned()
        .collect();

    let condition = infer_condition(requirement, &required_skills);
    let is_met = condition_met(requirement, &required_skills, &met_skills);

    Some(RequirementAnalysis {
        requirement: requirement.to_string(),
        required_skills,
        met_skills,
        condition,
        is_met,
    })
}

/// Picks the satisfaction rule for a requirement line.
///
/// `All` only when the line is exclusively conjunctive; anything ambiguous, disjunctive, or
/// without connectives falls back to `Any`.
pub fn infer_condition(requirement: &str, required_skills: &BTreeSet<String>) -> Condition {
    let has_and = requirement.contains('&') || AND_WORD.is_match(requirement);
    let has_or = requirement.contains(',')
        || requirement.contains('/')
        || OR_WORD.is_match(requirement)
        || required_skills.len() > MAX_CONJUNCTIVE_SKILLS;

    if has_and && !has_or {
        Condition::All
    } else {
        Condition::Any
    }
}

/// Resolves whether `met_skills` satisfies the requirement line.
pub fn condition_met(
    requirement: &str,
    required_skills: &BTreeSet<String>,
    met_skills: &BTreeSet<String>,
) -> bool {
    match infer_condition(requirement, required_skills) {
        Condition::All => required_skills.is_subset(met_skills),
        Condition::Any => !met_skills.is_empty(),
    }
}
