//! Competency Catalog: name → description, questions and behavioral signs.
//!
//! Built once at startup (built-in table or a JSON file) and shared read-only
//! through an `Arc`. No mutation is exposed after construction.

use std::collections::BTreeMap;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::models::competency::{CompetencyEntry, CompetencySummary};

pub mod defaults;
pub mod guidance;
pub mod handlers;
pub mod roles;

/// Lookup failure. Carries the valid names so callers can report them.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown competency '{name}'. Valid competencies: {}", known.join(", "))]
pub struct UnknownCompetency {
    pub name: String,
    pub known: Vec<String>,
}

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read competency catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid competency catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("competency catalog contains no entries")]
    Empty,

    #[error("competency '{0}' has an empty description")]
    MissingDescription(String),
}

#[derive(Debug, Clone)]
pub struct CompetencyCatalog {
    entries: BTreeMap<String, CompetencyEntry>,
}

impl CompetencyCatalog {
    pub fn new(entries: BTreeMap<String, CompetencyEntry>) -> Result<Self, CatalogLoadError> {
        if entries.is_empty() {
            return Err(CatalogLoadError::Empty);
        }
        if let Some((name, _)) = entries
            .iter()
            .find(|(_, e)| e.description.trim().is_empty())
        {
            return Err(CatalogLoadError::MissingDescription(name.clone()));
        }
        Ok(Self { entries })
    }

    /// The general competency framework shipped with the coach.
    pub fn builtin() -> Self {
        Self {
            entries: defaults::builtin_entries(),
        }
    }

    /// Parses a JSON object of `name -> entry`.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogLoadError> {
        let entries: BTreeMap<String, CompetencyEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CatalogLoadError> {
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;
        info!(
            "Loaded {} competencies from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Exact-name lookup.
    pub fn lookup(&self, name: &str) -> Result<&CompetencyEntry, UnknownCompetency> {
        self.entries.get(name).ok_or_else(|| UnknownCompetency {
            name: name.to_string(),
            known: self.names(),
        })
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CompetencyEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn summaries(&self) -> Vec<CompetencySummary> {
        self.iter()
            .map(|(name, entry)| CompetencySummary {
                name: name.to_string(),
                description: entry.description.clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_eight_general_competencies() {
        let catalog = CompetencyCatalog::builtin();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.names()[0], "Action Oriented");
        assert_eq!(catalog.names()[7], "Strategic Mindset");
    }

    #[test]
    fn test_builtin_entries_are_complete() {
        for (name, entry) in CompetencyCatalog::builtin().iter() {
            assert!(!entry.description.is_empty(), "{name} has no description");
            assert_eq!(entry.questions.len(), 8, "{name} question count");
            assert!(entry.skilled_signs.len() >= 4, "{name} skilled signs");
            assert!(entry.unskilled_signs.len() >= 4, "{name} unskilled signs");
        }
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let catalog = CompetencyCatalog::builtin();
        assert!(catalog.lookup("Drives Results").is_ok());
        let err = catalog.lookup("drives results").unwrap_err();
        assert_eq!(err.name, "drives results");
        assert_eq!(err.known.len(), 8);
        assert!(err.to_string().contains("Customer Focus"));
    }

    #[test]
    fn test_from_json_str_parses_entries() {
        let json = r#"{
            "Owns Quality": {
                "description": "Holds a high bar.",
                "skilled_signs": ["Catches defects early"],
                "unskilled_signs": ["Ships untested work"]
            }
        }"#;
        let catalog = CompetencyCatalog::from_json_str(json).unwrap();
        let entry = catalog.lookup("Owns Quality").unwrap();
        assert!(entry.questions.is_empty());
        assert_eq!(entry.skilled_signs, vec!["Catches defects early"]);
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(
            CompetencyCatalog::from_json_str("{}"),
            Err(CatalogLoadError::Empty)
        ));
    }

    #[test]
    fn test_blank_description_rejected() {
        let json = r#"{"Vague": {"description": "  "}}"#;
        assert!(matches!(
            CompetencyCatalog::from_json_str(json),
            Err(CatalogLoadError::MissingDescription(name)) if name == "Vague"
        ));
    }

    #[test]
    fn test_from_json_file_reads_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, r#"{"Grit": {"description": "Keeps going."}}"#).unwrap();
        let catalog = CompetencyCatalog::from_json_file(&path).unwrap();
        assert_eq!(catalog.names(), vec!["Grit"]);
    }
}
