//! Prompt builders for the writing assists.

use crate::models::story::{StarSection, Story};

pub fn suggest_section(section: StarSection, competency: &str, question: &str, story: &Story) -> String {
    format!(
        "Given the competency '{competency}', the interview question '{question}', and the following STAR story so far:\n\
         Situation: {}\n\
         Task: {}\n\
         Action: {}\n\
         Result: {}\n\n\
         Write a strong, concise response for the '{}' section. Only return the text for this section.",
        story.situation,
        story.task,
        story.action,
        story.result,
        section.title(),
    )
}

pub fn grammar(section: StarSection, text: &str) -> String {
    format!(
        "Proofread and suggest grammar/style improvements for this STAR {} section. \
         If there are errors or awkward phrasing, rewrite the text and explain the changes.\n\nText:\n{text}",
        section.title()
    )
}

pub fn tone(section: StarSection, text: &str) -> String {
    format!(
        "Analyze the emotional and professional tone of this STAR {} section. \
         Is it confident, empathetic, assertive, etc.? \
         Give a short summary and suggest improvements if needed.\n\nText:\n{text}",
        section.title()
    )
}

pub fn review(story: &Story) -> String {
    format!(
        "Review this full STAR story for clarity, conciseness, and impact. \
         Highlight areas for improvement and provide actionable suggestions.\n\n\
         Situation:\n{}\n\nTask:\n{}\n\nAction:\n{}\n\nResult:\n{}",
        story.situation, story.task, story.action, story.result
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_prompt_names_section_and_story() {
        let story = Story {
            situation: "Outage at launch".to_string(),
            ..Story::default()
        };
        let prompt = suggest_section(
            StarSection::Action,
            "Drives Results",
            "Tell me about a crisis.",
            &story,
        );
        assert!(prompt.contains("competency 'Drives Results'"));
        assert!(prompt.contains("Situation: Outage at launch"));
        assert!(prompt.contains("for the 'Action' section"));
    }

    #[test]
    fn test_section_prompts_embed_text() {
        assert!(grammar(StarSection::Task, "i done it").ends_with("Text:\ni done it"));
        assert!(tone(StarSection::Result, "We won.").contains("STAR Result section"));
    }
}
