//! Ordered decision list mapping measurements to a label.
//!
//! Rules overlap, so evaluation order is part of the contract: the first rule
//! that matches decides the label.

use crate::models::story::ScoreLabel;
use crate::scoring::measures::StoryMeasures;

pub const MIN_SITUATION_WORDS: usize = 20;
pub const MIN_ACTION_WORDS: usize = 30;
pub const MIN_RESULT_WORDS: usize = 20;
pub const OVERUSED_ACTION_WORDS: usize = 200;
pub const OVERUSED_RESULT_WORDS: usize = 50;
pub const TALENTED_ACTION_WORDS: usize = 50;
pub const ALIGNMENT_THRESHOLD: usize = 2;

pub fn classify(m: &StoryMeasures) -> ScoreLabel {
    if m.situation_len < MIN_SITUATION_WORDS
        || m.action_len < MIN_ACTION_WORDS
        || m.result_len < MIN_RESULT_WORDS
    {
        ScoreLabel::Unskilled
    } else if !m.uses_personal_voice {
        ScoreLabel::Unskilled
    } else if !m.has_quantifiable_result {
        ScoreLabel::Skilled
    } else if is_action_heavy(m) {
        ScoreLabel::Overused
    } else if m.skilled_alignment_count > ALIGNMENT_THRESHOLD
        && m.has_quantifiable_result
        && m.uses_personal_voice
        && m.action_len > TALENTED_ACTION_WORDS
    {
        ScoreLabel::Talented
    } else if m.unskilled_alignment_count > ALIGNMENT_THRESHOLD {
        ScoreLabel::Unskilled
    } else {
        ScoreLabel::Skilled
    }
}

/// Long action with a thin result.
pub fn is_action_heavy(m: &StoryMeasures) -> bool {
    m.action_len > OVERUSED_ACTION_WORDS && m.result_len < OVERUSED_RESULT_WORDS
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Passes rules 1–4 and lands on the default.
    fn baseline() -> StoryMeasures {
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
    fn test_default_is_skilled() {
        assert_eq!(classify(&baseline()), ScoreLabel::Skilled);
    }

    #[test]
    fn test_rule1_thresholds_are_strict() {
        for m in [
            StoryMeasures { situation_len: 19, ..baseline() },
            StoryMeasures { action_len: 29, ..baseline() },
            StoryMeasures { result_len: 19, ..baseline() },
        ] {
            assert_eq!(classify(&m), ScoreLabel::Unskilled);
        }
        let at_minimum = StoryMeasures {
            situation_len: 20,
            action_len: 30,
            result_len: 20,
            ..baseline()
        };
        assert_eq!(classify(&at_minimum), ScoreLabel::Skilled);
    }

    #[test]
    fn test_rule1_beats_talented_conditions() {
        let m = StoryMeasures {
            situation_len: 2,
            skilled_alignment_count: 4,
            ..baseline()
        };
        assert_eq!(classify(&m), ScoreLabel::Unskilled);
    }

    #[test]
    fn test_rule2_missing_voice_beats_everything_later() {
        let m = StoryMeasures {
            uses_personal_voice: false,
            has_quantifiable_result: false,
            ..baseline()
        };
        assert_eq!(classify(&m), ScoreLabel::Unskilled);
    }

    #[test]
    fn test_rule3_unquantified_is_skilled_even_if_action_heavy() {
        let m = StoryMeasures {
            has_quantifiable_result: false,
            action_len: 250,
            result_len: 25,
            skilled_alignment_count: 4,
            unskilled_alignment_count: 4,
            ..baseline()
        };
        assert_eq!(classify(&m), ScoreLabel::Skilled);
    }

    #[test]
    fn test_rule4_overused_beats_talented() {
        let m = StoryMeasures {
            action_len: 250,
            result_len: 30,
            skilled_alignment_count: 4,
            ..baseline()
        };
        assert_eq!(classify(&m), ScoreLabel::Overused);
    }

    #[test]
    fn test_rule4_needs_thin_result() {
        let m = StoryMeasures {
            action_len: 250,
            result_len: 50,
            ..baseline()
        };
        assert_eq!(classify(&m), ScoreLabel::Skilled);
    }

    #[test]
    fn test_rule5_talented_beats_unskilled_alignment() {
        let m = StoryMeasures {
            skilled_alignment_count: 3,
            unskilled_alignment_count: 3,
            ..baseline()
        };
        assert_eq!(classify(&m), ScoreLabel::Talented);
    }

    #[test]
    fn test_rule5_requires_action_over_fifty_words() {
        let m = StoryMeasures {
            action_len: 50,
            skilled_alignment_count: 3,
            ..baseline()
        };
        assert_eq!(classify(&m), ScoreLabel::Skilled);
    }

    #[test]
    fn test_rule5_requires_more_than_two_signs() {
        let m = StoryMeasures {
            skilled_alignment_count: 2,
            ..baseline()
        };
        assert_eq!(classify(&m), ScoreLabel::Skilled);
    }

    #[test]
    fn test_rule6_unskilled_alignment() {
        let m = StoryMeasures {
            unskilled_alignment_count: 3,
            ..baseline()
        };
        assert_eq!(classify(&m), ScoreLabel::Unskilled);
    }
}
