use serde::{Deserialize, Serialize};

/// Qualitative outcome of scoring a STAR story.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ScoreLabel {
    Talented,
    Skilled,
    Unskilled,
    Overused,
}

impl ScoreLabel {
    pub const ALL: [ScoreLabel; 4] = [
        ScoreLabel::Talented,
        ScoreLabel::Skilled,
        ScoreLabel::Unskilled,
        ScoreLabel::Overused,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreLabel::Talented => "Talented",
            ScoreLabel::Skilled => "Skilled",
            ScoreLabel::Unskilled => "Unskilled",
            ScoreLabel::Overused => "Overused",
        }
    }
}

impl std::fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the four narrative parts of a STAR story.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StarSection {
    Situation,
    Task,
    Action,
    Result,
}

impl StarSection {
    pub const ALL: [StarSection; 4] = [
        StarSection::Situation,
        StarSection::Task,
        StarSection::Action,
        StarSection::Result,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StarSection::Situation => "situation",
            StarSection::Task => "task",
            StarSection::Action => "action",
            StarSection::Result => "result",
        }
    }

    /// "Situation", "Task", ... for prompts and headings.
    pub fn title(&self) -> &'static str {
        match self {
            StarSection::Situation => "Situation",
            StarSection::Task => "Task",
            StarSection::Action => "Action",
            StarSection::Result => "Result",
        }
    }
}

impl std::str::FromStr for StarSection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "situation" => Ok(StarSection::Situation),
            "task" => Ok(StarSection::Task),
            "action" => Ok(StarSection::Action),
            "result" => Ok(StarSection::Result),
            other => Err(format!(
                "unknown STAR section '{other}' (expected situation, task, action or result)"
            )),
        }
    }
}

/// A STAR story as assembled from user input and, once scored, as persisted.
///
/// Every field is a flat string (or optional string) so the record can be
/// written to the story store without any mapping.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Story {
    #[serde(default)]
    pub competency: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub situation: String,
    #[serde(default)]
    pub task: String,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub result: String,
    #[serde(default)]
    pub score: Option<ScoreLabel>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoryProgress {
    pub filled_sections: usize,
    pub total_sections: usize,
    pub fraction: f64,
}

impl Story {
    pub fn section(&self, section: StarSection) -> &str {
        match section {
            StarSection::Situation => &self.situation,
            StarSection::Task => &self.task,
            StarSection::Action => &self.action,
            StarSection::Result => &self.result,
        }
    }

    /// Names of the fields that must be non-empty before the story can be scored.
    pub fn missing_for_scoring(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.competency.is_empty() {
            missing.push("competency");
        }
        for section in StarSection::ALL {
            if self.section(section).is_empty() {
                missing.push(section.as_str());
            }
        }
        missing
    }

    /// Drafting progress: how many STAR sections hold non-blank text.
    pub fn progress(&self) -> StoryProgress {
        let total_sections = StarSection::ALL.len();
        let filled_sections = StarSection::ALL
            .iter()
            .filter(|s| !self.section(**s).trim().is_empty())
            .count();
        StoryProgress {
            filled_sections,
            total_sections,
            fraction: filled_sections as f64 / total_sections as f64,
        }
    }

    /// Returns a copy carrying the given label. The original is left untouched.
    pub fn with_score(&self, label: ScoreLabel) -> Story {
        Story {
            score: Some(label),
            ..self.clone()
        }
    }
}
