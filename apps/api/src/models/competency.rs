use serde::{Deserialize, Serialize};

/// Reference data for one competency. Read-only after the catalog is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompetencyEntry {
    pub description: String,
    #[serde(default)]
    pub questions: Vec<String>,
    #[serde(default)]
    pub skilled_signs: Vec<String>,
    #[serde(default)]
    pub unskilled_signs: Vec<String>,
}

/// List view of the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CompetencySummary {
    pub name: String,
    pub description: String,
}
