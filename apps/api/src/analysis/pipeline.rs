//! Full candidate evaluation: analysis report, feedback and preparation plan in one pass.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::analysis::analyze;
use crate::analysis::feedback::{compose_feedback, extract_candidate_name, Feedback};
use crate::analysis::models::AnalysisReport;
use crate::ontology::SkillOntology;
use crate::preparation::{build_preparation_plan, ResourceTable, SkillResource};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateEvaluation {
    pub candidate_name: String,
    pub report: AnalysisReport,
    pub feedback: Feedback,
    pub preparation_plan: BTreeMap<String, SkillResource>,
}

pub fn evaluate_candidate(
    resume_text: &str,
    jd_text: &str,
    ontology: &SkillOntology,
    resources: &ResourceTable,
) -> CandidateEvaluation {
    let report = analyze(resume_text, jd_text, ontology);
    let candidate_name = extract_candidate_name(resume_text);
    let feedback = compose_feedback(report.match_score, &candidate_name);
    let preparation_plan = build_preparation_plan(&report.unmet_skills, resources);

    CandidateEvaluation {
        candidate_name,
        report,
        feedback,
        preparation_plan,
    }
}
