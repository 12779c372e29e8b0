//! Skill Ontology — canonical skill names and the surface aliases that refer to them.
//!
//! Built once at startup (from the built-in table or a JSON file) and shared read-only
//! behind an `Arc`. Every alias is compiled into a case-insensitive, word-bounded pattern,
//! so multi-word aliases only match as contiguous phrases.

mod builtin;

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use anyhow::Context;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use builtin::BUILTIN_SKILLS;

#[derive(Debug, Error)]
pub enum OntologyError {
    #[error("Skill name cannot be empty")]
    EmptySkillName,

    #[error("Alias '{alias}' for skill '{skill}' could not be compiled: {source}")]
    InvalidAlias {
        skill: String,
        alias: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Debug, Clone)]
struct SkillEntry {
    aliases: BTreeSet<String>,
    patterns: Vec<Regex>,
}

impl SkillEntry {
    fn occurs_in(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
    }
}

/// Immutable mapping from canonical skill to its alias set.
///
/// Invariant: every canonical name is a member of its own alias set.
#[derive(Debug, Clone)]
pub struct SkillOntology {
    skills: BTreeMap<String, SkillEntry>,
}

/// One row of the public ontology listing.
#[derive(Debug, Clone, Serialize)]
pub struct SkillListing {
    pub skill: String,
    pub aliases: Vec<String>,
}

impl SkillOntology {
    /// Builds an ontology from `(canonical, aliases)` pairs.
    ///
    /// Names and aliases are trimmed and lowercased; blank aliases are skipped and repeated
    /// canonical names merge their alias lists.
    pub fn from_entries<I, S, A>(entries: I) -> Result<Self, OntologyError>
    where
        I: IntoIterator<Item = (S, A)>,
        S: AsRef<str>,
        A: IntoIterator,
        A::Item: AsRef<str>,
    {
        let mut alias_sets: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for (skill, aliases) in entries {
            let skill = normalize(skill.as_ref());
            if skill.is_empty() {
                return Err(OntologyError::EmptySkillName);
            }

            let set = alias_sets.entry(skill.clone()).or_default();
            set.insert(skill);
            set.extend(
                aliases
                    .into_iter()
                    .map(|a| normalize(a.as_ref()))
                    .filter(|a| !a.is_empty()),
            );
        }

        let mut skills = BTreeMap::new();
        for (skill, aliases) in alias_sets {
            let patterns = aliases
                .iter()
                .map(|alias| {
                    alias_pattern(alias).map_err(|source| OntologyError::InvalidAlias {
                        skill: skill.clone(),
                        alias: alias.clone(),
                        source,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            skills.insert(skill, SkillEntry { aliases, patterns });
        }

        Ok(Self { skills })
    }

    /// The ontology shipped with the service.
    pub fn builtin() -> Result<Self, OntologyError> {
        Self::from_entries(BUILTIN_SKILLS.iter().map(|(skill, aliases)| (*skill, *aliases)))
    }

    /// Loads the ontology from a JSON object `{ "skill": ["alias", ...] }` when a path is
    /// given, otherwise falls back to the built-in table.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let ontology = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read skill ontology {}", path.display()))?;
                let table: BTreeMap<String, Vec<String>> = serde_json::from_str(&raw)
                    .with_context(|| format!("Skill ontology {} is not valid JSON", path.display()))?;
                Self::from_entries(table)?
            }
            None => Self::builtin()?,
        };

        info!("Skill ontology loaded ({} canonical skills)", ontology.len());
        Ok(ontology)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn aliases(&self, skill: &str) -> Option<&BTreeSet<String>> {
        self.skills.get(skill).map(|e| &e.aliases)
    }

    /// Every canonical skill with at least one alias occurring in `text`.
    pub fn skills_in(&self, text: &str) -> BTreeSet<String> {
        self.skills
            .iter()
            .filter(|(_, entry)| entry.occurs_in(text))
            .map(|(skill, _)| skill.clone())
            .collect()
    }

    /// Whether any alias of `skill` occurs in `text`. Unknown skills never match.
    pub fn mentions(&self, skill: &str, text: &str) -> bool {
        self.skills
            .get(skill)
            .is_some_and(|entry| entry.occurs_in(text))
    }

    pub fn listing(&self) -> Vec<SkillListing> {
        self.skills
            .iter()
            .map(|(skill, entry)| SkillListing {
                skill: skill.clone(),
                aliases: entry.aliases.iter().cloned().collect(),
            })
            .collect()
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

fn alias_pattern(alias: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(alias)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn builtin() -> SkillOntology {
        SkillOntology::builtin().unwrap()
    }

    #[test]
    fn test_every_skill_is_its_own_alias() {
        let ontology = builtin();
        for row in ontology.listing() {
            assert!(
                row.aliases.contains(&row.skill),
                "{} missing from its own aliases",
                row.skill
            );
        }
    }

    #[test]
    fn test_canonical_name_added_when_not_listed() {
        let ontology = SkillOntology::from_entries([("Database", vec!["sql"])]).unwrap();
        let aliases = ontology.aliases("database").unwrap();
        assert!(aliases.contains("database"));
        assert!(aliases.contains("sql"));
    }

    #[test]
    fn test_empty_skill_name_rejected() {
        let err = SkillOntology::from_entries([("  ", vec!["x"])]).unwrap_err();
        assert!(matches!(err, OntologyError::EmptySkillName));
    }

    #[test]
    fn test_duplicate_skills_merge_aliases() {
        let ontology =
            SkillOntology::from_entries([("cloud", vec!["aws"]), ("cloud", vec!["gcp"])]).unwrap();
        assert_eq!(ontology.len(), 1);
        assert_eq!(ontology.aliases("cloud").unwrap().len(), 3);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let ontology = builtin();
        assert!(ontology.mentions("python", "Senior PYTHON developer"));
    }

    #[test]
    fn test_match_is_word_bounded() {
        let ontology = builtin();
        // "java" must not match inside "javascript"
        assert!(!ontology.mentions("java", "Strong javascript skills"));
        // "go" must not match inside "good"
        assert!(!ontology.mentions("go", "good communication"));
    }

    #[test]
    fn test_multi_word_alias_requires_contiguous_phrase() {
        let ontology = builtin();
        assert!(ontology.mentions("machine learning", "Applied machine learning at scale"));
        assert!(!ontology.mentions("machine learning", "machine shop, learning fast"));
    }

    #[test]
    fn test_aliases_collapse_to_one_canonical_skill() {
        let ontology = builtin();
        let found = ontology.skills_in("Experience with Docker/Kubernetes");
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!["devops"]);
    }

    #[test]
    fn test_unknown_skill_never_mentioned() {
        let ontology = builtin();
        assert!(!ontology.mentions("cobol", "cobol"));
    }

    #[test]
    fn test_special_characters_are_escaped() {
        let ontology = builtin();
        assert!(ontology.mentions("devops", "Owned the CI/CD pipeline"));
        assert!(ontology.mentions("ui/ux", "ui/ux research"));
    }

    #[test]
    fn test_load_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"rust": ["cargo", "tokio"]}}"#).unwrap();

        let ontology = SkillOntology::load(Some(file.path())).unwrap();
        assert_eq!(ontology.len(), 1);
        assert!(ontology.mentions("rust", "async services on Tokio"));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(SkillOntology::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_load_without_path_uses_builtin() {
        let ontology = SkillOntology::load(None).unwrap();
        assert_eq!(ontology.len(), BUILTIN_SKILLS.len());
    }
}
