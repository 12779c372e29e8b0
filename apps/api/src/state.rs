use std::sync::Arc;

use crate::config::Config;
use crate::extraction::DocumentExtractor;
use crate::ontology::SkillOntology;
use crate::preparation::ResourceTable;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The ontology and resource table are read-only after startup and shared without locks.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub ontology: Arc<SkillOntology>,
    pub resources: Arc<ResourceTable>,
    /// Pluggable document extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn DocumentExtractor>,
}
