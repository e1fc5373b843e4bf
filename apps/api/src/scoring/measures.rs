use serde::Serialize;

use crate::models::competency::CompetencyEntry;
use crate::models::story::Story;

/// Text measurements the rubric and the feedback rules are evaluated against.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StoryMeasures {
    pub situation_len: usize,
    pub task_len: usize,
    pub action_len: usize,
    pub result_len: usize,
    pub has_quantifiable_result: bool,
    pub uses_personal_voice: bool,
    pub skilled_alignment_count: usize,
    pub unskilled_alignment_count: usize,
}

// Plain substring checks against the lower-cased action. "time " matches "me ".
const PERSONAL_VOICE_MARKERS: &[&str] = &["i ", "my ", "me "];

impl StoryMeasures {
    pub fn measure(story: &Story, competency: &CompetencyEntry) -> Self {
        let action_lower = story.action.to_lowercase();
        let result_lower = story.result.to_lowercase();

        Self {
            situation_len: word_count(&story.situation),
            task_len: word_count(&story.task),
            action_len: word_count(&story.action),
            result_len: word_count(&story.result),
            has_quantifiable_result: has_digit(&story.result),
            uses_personal_voice: uses_personal_voice(&action_lower),
            skilled_alignment_count: alignment_count(
                &competency.skilled_signs,
                &action_lower,
                &result_lower,
            ),
            unskilled_alignment_count: alignment_count(
                &competency.unskilled_signs,
                &action_lower,
                &result_lower,
            ),
        }
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Any Unicode numeric character counts, so "٤٢" and "²" are quantified too.
pub fn has_digit(text: &str) -> bool {
    text.chars().any(char::is_numeric)
}

/// `action_lower` must already be lower-cased.
fn uses_personal_voice(action_lower: &str) -> bool {
    PERSONAL_VOICE_MARKERS
        .iter()
        .any(|marker| action_lower.contains(marker))
}

/// Counts signs with at least one word occurring as a substring of the
/// lower-cased action or result.
fn alignment_count(signs: &[String], action_lower: &str, result_lower: &str) -> usize {
    signs
        .iter()
        .filter(|sign| {
            sign.to_lowercase()
                .split_whitespace()
                .any(|word| action_lower.contains(word) || result_lower.contains(word))
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(skilled: &[&str], unskilled: &[&str]) -> CompetencyEntry {
        CompetencyEntry {
            description: "test".to_string(),
            questions: vec![],
            skilled_signs: skilled.iter().map(|s| s.to_string()).collect(),
            unskilled_signs: unskilled.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn story(action: &str, result: &str) -> Story {
        Story {
            competency: "Test".to_string(),
            situation: "one two three".to_string(),
            task: "alpha\tbeta\ngamma  delta".to_string(),
            action: action.to_string(),
            result: result.to_string(),
            ..Story::default()
        }
    }

    #[test]
    fn test_word_counts_split_on_any_whitespace() {
        let m = StoryMeasures::measure(&story("", "  "), &entry(&[], &[]));
        assert_eq!(m.situation_len, 3);
        assert_eq!(m.task_len, 4);
        assert_eq!(m.action_len, 0);
        assert_eq!(m.result_len, 0);
    }

    #[test]
    fn test_quantifiable_result_needs_a_digit() {
        let e = entry(&[], &[]);
        assert!(!StoryMeasures::measure(&story("", "forty two percent"), &e).has_quantifiable_result);
        assert!(StoryMeasures::measure(&story("", "up 42%"), &e).has_quantifiable_result);
    }

    #[test]
    fn test_non_ascii_digits_count_as_quantified() {
        let e = entry(&[], &[]);
        assert!(StoryMeasures::measure(&story("", "ارتفعت المبيعات ٤٢٪"), &e).has_quantifiable_result);
        assert!(StoryMeasures::measure(&story("", "売上が３割増えた"), &e).has_quantifiable_result);
        assert!(has_digit("٤٢"));
        assert!(!has_digit("no numbers here"));
    }

    #[test]
    fn test_personal_voice_is_case_insensitive() {
        let e = entry(&[], &[]);
        assert!(StoryMeasures::measure(&story("I led it", ""), &e).uses_personal_voice);
        assert!(StoryMeasures::measure(&story("With MY team", ""), &e).uses_personal_voice);
        assert!(!StoryMeasures::measure(&story("We led it", ""), &e).uses_personal_voice);
    }

    #[test]
    fn test_personal_voice_keeps_substring_false_positives() {
        let e = entry(&[], &[]);
        // "time " contains "me ", "taxi " contains "i ".
        assert!(StoryMeasures::measure(&story("We saved time here", ""), &e).uses_personal_voice);
        assert!(StoryMeasures::measure(&story("The taxi arrived", ""), &e).uses_personal_voice);
        // A trailing marker without a following space does not count.
        assert!(!StoryMeasures::measure(&story("Done by me", ""), &e).uses_personal_voice);
    }

    #[test]
    fn test_alignment_counts_signs_not_words() {
        let e = entry(
            &["Zebra crossing", "Quokka smile", "Narwhal"],
            &["Yak shaving speed"],
        );
        let m = StoryMeasures::measure(&story("a zebra and a quokka", "nothing"), &e);
        assert_eq!(m.skilled_alignment_count, 2);
        assert_eq!(m.unskilled_alignment_count, 0);
    }

    #[test]
    fn test_alignment_matches_word_fragments_in_result() {
        let e = entry(&["Persists despite setbacks"], &["Gives up"]);
        // "up" is a substring of "upgraded".
        let m = StoryMeasures::measure(&story("nothing", "we upgraded the setbacks log"), &e);
        assert_eq!(m.skilled_alignment_count, 1);
        assert_eq!(m.unskilled_alignment_count, 1);
    }
}
