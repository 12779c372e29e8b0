//! Preparation plan — static guidance, example projects and links per skill, looked up for
//! the skills a candidate is missing.

mod builtin;

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillResource {
    pub preparation: String,
    pub projects: Vec<String>,
    pub resources: Vec<ResourceLink>,
}

/// Read-only lookup table: canonical skill → preparation guidance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceTable {
    entries: BTreeMap<String, SkillResource>,
}

impl ResourceTable {
    pub fn builtin() -> Self {
        builtin::builtin_resources().collect()
    }

    /// Loads a JSON object `{ "skill": { preparation, projects, resources } }` when a path is
    /// given, otherwise the built-in table.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let table = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read resource table {}", path.display()))?;
                let table: ResourceTable = serde_json::from_str(&raw).with_context(|| {
                    format!("Resource table {} is not valid JSON", path.display())
                })?;
                table.normalized()
            }
            None => Self::builtin(),
        };

        info!("Resource table loaded ({} skills)", table.len());
        Ok(table)
    }

    pub fn get(&self, skill: &str) -> Option<&SkillResource> {
        self.entries.get(skill)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Keys are matched against canonical skill names, which are always lowercase.
    fn normalized(self) -> Self {
        self.entries
            .into_iter()
            .map(|(skill, resource)| (skill.trim().to_lowercase(), resource))
            .collect()
    }
}

impl FromIterator<(String, SkillResource)> for ResourceTable {
    fn from_iter<T: IntoIterator<Item = (String, SkillResource)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Guidance for each unmet skill that has a table entry, ordered by skill name.
/// Skills without guidance (degree programmes, niche tools) are skipped.
pub fn build_preparation_plan(
    unmet_skills: &BTreeSet<String>,
    resources: &ResourceTable,
) -> BTreeMap<String, SkillResource> {
    unmet_skills
        .iter()
        .filter_map(|skill| resources.get(skill).map(|r| (skill.clone(), r.clone())))
        .collect()
}
