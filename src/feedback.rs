//! Rule-based feedback generator
//!
//! Maps a [`PromptScore`] to human-readable improvement suggestions.
//! Each dimension contributes at most one sentence, evaluated in fixed
//! order (clarity, length, specificity, actionability). A high overall
//! score overrides everything with a single praise sentence.

use crate::models::PromptScore;

const PRAISE: &str = "Your prompt is well-crafted! It's clear, specific, and actionable.";
const GOOD_BUT_IMPROVABLE: &str =
    "Your prompt is good, but could be improved for even better results.";

/// Generate improvement feedback for a score.
///
/// Derived solely from the score object; callers that want an empty
/// string for empty input should go through [`crate::analyze`].
pub fn prompt_feedback(score: &PromptScore) -> String {
    if score.overall >= 85 {
        return PRAISE.to_string();
    }

    let mut tips: Vec<&str> = Vec::new();

    if score.clarity < 60 {
        tips.push(
            "Make your prompt clearer by using direct language and avoiding vague terms like 'maybe' or 'kind of'.",
        );
    } else if score.clarity < 80 {
        tips.push(
            "Consider structuring your prompt with bullet points or clear sections to improve clarity.",
        );
    }

    if score.length < 40 {
        tips.push(
            "Your prompt is too short. Adding more details (aim for 40-200 words) will significantly improve results.",
        );
    } else if score.length < 70 {
        tips.push(
            "While your prompt has good length, adding a few more specific details could improve results.",
        );
    } else if score.length > 95 {
        tips.push("Your prompt might be too long. Consider focusing on the most important points.");
    }

    if score.specificity < 50 {
        tips.push(
            "Add specific details, examples, or parameters (like numbers, dates, or measurements) to your prompt.",
        );
    } else if score.specificity < 75 {
        tips.push(
            "Add context about your target audience or intended purpose to make your prompt more specific.",
        );
    }

    if score.actionability < 50 {
        tips.push(
            "Start with a clear action verb (like 'create', 'explain', or 'analyze') to make your intention explicit.",
        );
    } else if score.actionability < 75 {
        tips.push(
            "Consider adding clear goals or desired outcomes to make your prompt more actionable.",
        );
    }

    if tips.is_empty() {
        return GOOD_BUT_IMPROVABLE.to_string();
    }

    tips.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(clarity: u8, length: u8, specificity: u8, actionability: u8, overall: u8) -> PromptScore {
        PromptScore {
            clarity,
            length,
            specificity,
            actionability,
            overall,
        }
    }

    #[test]
    fn test_high_overall_returns_only_praise() {
        // Even with a weak dimension, overall >= 85 wins.
        let s = score(95, 30, 95, 95, 85);
        assert_eq!(prompt_feedback(&s), PRAISE);
    }

    #[test]
    fn test_no_tips_returns_improvable_message() {
        // Every dimension above its tip thresholds, overall below 85.
        let s = score(80, 90, 75, 75, 80);
        assert_eq!(prompt_feedback(&s), GOOD_BUT_IMPROVABLE);
    }

    #[test]
    fn test_tips_concatenate_in_fixed_order() {
        let s = score(50, 30, 40, 40, 40);
        let feedback = prompt_feedback(&s);
        let clarity_pos = feedback.find("direct language").unwrap();
        let length_pos = feedback.find("too short").unwrap();
        let specificity_pos = feedback.find("numbers, dates, or measurements").unwrap();
        let action_pos = feedback.find("action verb").unwrap();
        assert!(clarity_pos < length_pos);
        assert!(length_pos < specificity_pos);
        assert!(specificity_pos < action_pos);
    }

    #[test]
    fn test_mid_band_tips() {
        let s = score(70, 50, 60, 60, 60);
        let feedback = prompt_feedback(&s);
        assert!(feedback.contains("bullet points or clear sections"));
        assert!(feedback.contains("a few more specific details"));
        assert!(feedback.contains("target audience or intended purpose"));
        assert!(feedback.contains("goals or desired outcomes"));
    }

    #[test]
    fn test_too_long_tip() {
        let s = score(80, 96, 75, 75, 80);
        assert_eq!(
            prompt_feedback(&s),
            "Your prompt might be too long. Consider focusing on the most important points."
        );
    }

    #[test]
    fn test_threshold_edges() {
        // Exactly at thresholds: no tip fires for that dimension.
        let s = score(80, 70, 75, 75, 70);
        assert_eq!(prompt_feedback(&s), GOOD_BUT_IMPROVABLE);
        // Just below: tips fire.
        let s = score(79, 69, 74, 74, 70);
        let feedback = prompt_feedback(&s);
        assert!(feedback.contains("bullet points"));
        assert!(feedback.contains("specific details could improve"));
        assert!(feedback.contains("target audience"));
        assert!(feedback.contains("goals or desired outcomes"));
    }
}
