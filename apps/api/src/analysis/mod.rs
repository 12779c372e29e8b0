// Skill-gap analysis engine.
// Data flows one way: segment → classify each line → aggregate → feedback + preparation plan.
// Everything below `handlers` is synchronous and pure; the ontology and resource table are
// shared read-only.

pub mod aggregator;
pub mod classifier;
pub mod feedback;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod segmenter;

use tracing::debug;

use crate::analysis::aggregator::aggregate;
use crate::analysis::classifier::classify_requirement;
use crate::analysis::models::AnalysisReport;
use crate::analysis::segmenter::segment_requirements;
use crate::ontology::SkillOntology;

/// Scores `document_text` against every requirement line in `requirement_text`.
///
/// Total over its inputs: empty requirement text gives a report with no requirements and a
/// score of 100, and lines naming no known skill are silently skipped.
pub fn analyze(
    document_text: &str,
    requirement_text: &str,
    ontology: &SkillOntology,
) -> AnalysisReport {
    let lines = segment_requirements(requirement_text);
    let per_requirement: Vec<_> = lines
        .iter()
        .filter_map(|line| classify_requirement(line, document_text, ontology))
        .collect();

    debug!(
        "Classified {} of {} requirement lines",
        per_requirement.len(),
        lines.len()
    );

    aggregate(per_requirement)
}
