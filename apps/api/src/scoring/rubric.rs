use serde::Serialize;

use crate::models::story::ScoreLabel;

/// Fixed description and criteria for a label.
#[derive(Debug, Clone, Serialize)]
pub struct LabelRubric {
    pub label: ScoreLabel,
    pub description: &'static str,
    pub criteria: Vec<&'static str>,
}

pub fn description(label: ScoreLabel) -> &'static str {
    match label {
        ScoreLabel::Talented => {
            "Exceptional demonstration of the competency, going beyond expectations"
        }
        ScoreLabel::Skilled => "Effective demonstration of the competency, meeting expectations",
        ScoreLabel::Unskilled => "Limited demonstration of the competency, below expectations",
        ScoreLabel::Overused => "Excessive or inappropriate application of the competency",
    }
}

/// One-sentence verdict shown above the suggestions.
pub fn summary(label: ScoreLabel) -> &'static str {
    match label {
        ScoreLabel::Talented => "Your story demonstrates excellent mastery of this competency. It's detailed, focused, and shows significant impact.",
        ScoreLabel::Skilled => "Your story effectively demonstrates this competency. It provides a clear example with appropriate detail and positive outcomes.",
        ScoreLabel::Unskilled => "Your story needs improvement to effectively demonstrate this competency. It lacks some key elements that would make it more convincing.",
        ScoreLabel::Overused => "Your story shows an overemphasis on certain aspects of the competency, potentially at the expense of balance and effectiveness.",
    }
}

pub fn rubric(label: ScoreLabel) -> LabelRubric {
    let criteria = match label {
        ScoreLabel::Talented => vec![
            "Provides specific, detailed examples with measurable outcomes",
            "Shows initiative and leadership beyond the immediate task",
            "Demonstrates complex problem-solving and creative thinking",
            "Exhibits high impact results that benefited multiple stakeholders",
            "Shows clear personal ownership and accountability",
        ],
        ScoreLabel::Skilled => vec![
            "Provides clear examples with concrete outcomes",
            "Shows appropriate action steps relevant to the situation",
            "Demonstrates logical problem-solving approach",
            "Exhibits positive results that achieved objectives",
            "Shows personal contribution to the outcome",
        ],
        ScoreLabel::Unskilled => vec![
            "Provides vague or generic examples without specifics",
            "Shows minimal action or reactive rather than proactive approach",
            "Demonstrates limited problem-solving or decision making",
            "Exhibits unclear or minimal results",
            "Shows little personal responsibility or ownership",
        ],
        ScoreLabel::Overused => vec![
            "Demonstrates overkill or disproportionate response to the situation",
            "Shows rigid adherence to a strength that became counterproductive",
            "Exhibits tunnel vision or ignoring of other important factors",
            "Demonstrates perfectionism or micromanagement",
            "Shows inability to adapt approach when needed",
        ],
    };
    LabelRubric {
        label,
        description: description(label),
        criteria,
    }
}

pub fn full_rubric() -> Vec<LabelRubric> {
    ScoreLabel::ALL.into_iter().map(rubric).collect()
}
