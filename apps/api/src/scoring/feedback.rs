//! Improvement suggestions. Unlike classification, every rule here fires
//! independently; output order follows the rule order below.

use crate::models::competency::CompetencyEntry;
use crate::models::story::ScoreLabel;
use crate::scoring::classifier::{is_action_heavy, MIN_RESULT_WORDS, MIN_SITUATION_WORDS};
use crate::scoring::measures::StoryMeasures;

const MIN_TASK_WORDS: usize = 20;
const DETAILED_ACTION_WORDS: usize = 50;

pub const ADD_CONTEXT: &str =
    "Add more context to your situation to set the stage more effectively.";
pub const CLARIFY_TASK: &str = "Clarify your specific responsibility or challenge in more detail.";
pub const USE_FIRST_PERSON: &str =
    "Focus more on YOUR actions by using 'I' statements rather than 'we' or passive voice.";
pub const DETAIL_ACTIONS: &str =
    "Provide more specific details about the steps you took and your decision-making process.";
pub const EXPAND_RESULT: &str = "Expand on the outcomes and impact of your actions.";
pub const QUANTIFY_RESULT: &str =
    "Include specific numbers or metrics to quantify your results (%, $, time saved, etc.).";
pub const REBALANCE: &str =
    "Balance your story by focusing more on results and less on listing every action step.";
pub const GENERIC_CLOSING_TIP: &str =
    "To further strengthen your story, tie each action explicitly back to the behaviors this competency describes.";

const CLOSING_SIGN_COUNT: usize = 2;

pub fn build_feedback(
    competency_name: &str,
    competency: &CompetencyEntry,
    m: &StoryMeasures,
    label: ScoreLabel,
) -> Vec<String> {
    let rules: [(bool, &str); 7] = [
        (m.situation_len < MIN_SITUATION_WORDS, ADD_CONTEXT),
        (m.task_len < MIN_TASK_WORDS, CLARIFY_TASK),
        (!m.uses_personal_voice, USE_FIRST_PERSON),
        (m.action_len < DETAILED_ACTION_WORDS, DETAIL_ACTIONS),
        (m.result_len < MIN_RESULT_WORDS, EXPAND_RESULT),
        (!m.has_quantifiable_result, QUANTIFY_RESULT),
        (is_action_heavy(m), REBALANCE),
    ];

    let mut feedback: Vec<String> = rules
        .iter()
        .filter(|(fires, _)| *fires)
        .map(|(_, text)| text.to_string())
        .collect();

    match label {
        ScoreLabel::Unskilled | ScoreLabel::Overused => {
            feedback.extend(
                competency
                    .skilled_signs
                    .iter()
                    .take(CLOSING_SIGN_COUNT)
                    .map(|sign| format!("Consider incorporating: {sign}")),
            );
        }
        ScoreLabel::Talented | ScoreLabel::Skilled => match closing_tips(competency_name) {
            Some(tips) => feedback.extend(
                tips.iter()
                    .map(|tip| format!("To further strengthen your story, consider {tip}.")),
            ),
            None => feedback.push(GENERIC_CLOSING_TIP.to_string()),
        },
    }

    feedback
}

fn closing_tips(competency_name: &str) -> Option<[&'static str; 2]> {
    let tips = match competency_name {
        "Action Oriented" => [
            "emphasizing how quickly you took initiative without excessive planning",
            "highlighting your eagerness to tackle challenges head-on",
        ],
        "Being Resilient" => [
            "focusing more on how you maintained composure under pressure",
            "emphasizing what you learned from overcoming adversity",
        ],
        "Collaborates" => [
            "detailing how you balanced your interests with those of others",
            "explaining how you recognized others' contributions",
        ],
        "Communicates Effectively" => [
            "highlighting how you adapted your communication style to different audiences",
            "showing how you ensured your message was clearly understood",
        ],
        "Customer Focus" => [
            "emphasizing how you gained insight into customer needs",
            "detailing how you built a strong customer relationship",
        ],
        "Decision Quality" => [
            "highlighting the factors you considered in your decision-making process",
            "showing how you made decisions with incomplete information",
        ],
        "Drives Results" => [
            "emphasizing your persistence despite obstacles",
            "highlighting how you exceeded expectations or goals",
        ],
        "Strategic Mindset" => [
            "emphasizing how you anticipated future trends or implications",
            "showing how your approach aligned with broader objectives",
        ],
        _ => return None,
    };
    Some(tips)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> CompetencyEntry {
        CompetencyEntry {
            description: "test".to_string(),
            questions: vec![],
            skilled_signs: vec![
                "First sign".to_string(),
                "Second sign".to_string(),
                "Third sign".to_string(),
            ],
            unskilled_signs: vec![],
        }
    }

    fn strong() -> StoryMeasures {
        StoryMeasures {
            situation_len: 25,
            task_len: 25,
            action_len: 60,
            result_len: 25,
            has_quantifiable_result: true,
            uses_personal_voice: true,
            skilled_alignment_count: 0,
            unskilled_alignment_count: 0,
        }
    }

    #[test]
    fn test_strong_story_gets_only_closing_tips() {
        let feedback = build_feedback("Drives Results", &entry(), &strong(), ScoreLabel::Skilled);
        assert_eq!(
            feedback,
            vec![
                "To further strengthen your story, consider emphasizing your persistence despite obstacles.",
                "To further strengthen your story, consider highlighting how you exceeded expectations or goals.",
            ]
        );
    }

    #[test]
    fn test_all_rules_fire_in_order() {
        let m = StoryMeasures {
            situation_len: 1,
            task_len: 1,
            action_len: 1,
            result_len: 1,
            has_quantifiable_result: false,
            uses_personal_voice: false,
            ..strong()
        };
        let feedback = build_feedback("Drives Results", &entry(), &m, ScoreLabel::Unskilled);
        assert_eq!(
            feedback,
            vec![
                ADD_CONTEXT,
                CLARIFY_TASK,
                USE_FIRST_PERSON,
                DETAIL_ACTIONS,
                EXPAND_RESULT,
                QUANTIFY_RESULT,
                "Consider incorporating: First sign",
                "Consider incorporating: Second sign",
            ]
        );
    }

    #[test]
    fn test_rebalance_only_when_action_heavy() {
        let heavy = StoryMeasures {
            action_len: 250,
            result_len: 30,
            ..strong()
        };
        let feedback = build_feedback("Drives Results", &entry(), &heavy, ScoreLabel::Overused);
        assert_eq!(feedback[0], REBALANCE);
        assert_eq!(feedback.len(), 3);

        let feedback = build_feedback("Drives Results", &entry(), &strong(), ScoreLabel::Skilled);
        assert!(!feedback.iter().any(|f| f == REBALANCE));
    }

    #[test]
    fn test_unknown_competency_gets_generic_closing_tip() {
        let feedback = build_feedback("Owns Quality", &entry(), &strong(), ScoreLabel::Talented);
        assert_eq!(feedback, vec![GENERIC_CLOSING_TIP]);
    }

    #[test]
    fn test_closing_signs_tolerate_short_lists() {
        let sparse = CompetencyEntry {
            skilled_signs: vec!["Only sign".to_string()],
            ..entry()
        };
        let feedback = build_feedback("Owns Quality", &sparse, &strong(), ScoreLabel::Overused);
        assert_eq!(feedback, vec!["Consider incorporating: Only sign"]);
    }
}
