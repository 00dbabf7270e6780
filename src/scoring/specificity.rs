//! Specificity dimension scorer
//!
//! Rewards concrete detail: specificity keywords, hard formats
//! (numbers, dates, units), and the three indicator groups (audience
//! context, output format, explicit constraints), on top of a length
//! baseline.

use super::length_baseline;
use crate::keywords::{
    any_match, count_matches, CONSTRAINT_INDICATORS, CONTEXT_INDICATORS, FORMAT_INDICATORS,
    SPECIFICITY_KEYWORDS,
};
use crate::lexical::TextSignals;

pub(super) fn score(lower: &str, signals: &TextSignals) -> u8 {
    let keyword_hits = count_matches(lower, SPECIFICITY_KEYWORDS);

    let format_hits = usize::from(signals.has_numbers)
        + usize::from(signals.has_dates)
        + usize::from(signals.has_units);

    let indicator_hits = usize::from(any_match(lower, CONTEXT_INDICATORS))
        + usize::from(any_match(lower, FORMAT_INDICATORS))
        + usize::from(any_match(lower, CONSTRAINT_INDICATORS));

    let raw = (keyword_hits * 12 + format_hits * 15 + indicator_hits * 15) as f64
        + length_baseline(signals.word_count, 25.0);

    raw.round().min(100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_text(text: &str) -> u8 {
        score(&text.to_lowercase(), &TextSignals::extract(text))
    }

    #[test]
    fn test_vague_short_prompt_scores_low() {
        assert!(score_text("write an email") < 50);
    }

    #[test]
    fn test_keywords_raise_score() {
        let vague = score_text("write an email");
        let keyworded = score_text("write a detailed email with a specific example");
        assert!(keyworded > vague);
    }

    #[test]
    fn test_formats_raise_score() {
        let plain = score_text("describe the banner");
        let formatted = score_text("describe the 300px banner due 12/01/2025");
        // numbers + units + dates = 3 format hits worth 45 points
        assert!(formatted >= plain + 45);
    }

    #[test]
    fn test_indicator_groups_each_count_once() {
        // One context, one format, one constraint indicator; repeated
        // entries within a group add nothing.
        let s = score_text("for a beginner audience, use bullet points, limit to 100 words at most");
        // 3 indicator groups x 15 + 1 format hit (number) x 15
        // + baseline round(13/40 x 25) = 8, no specificity keywords
        assert_eq!(s, 68);
    }

    #[test]
    fn test_clamped_at_100() {
        let loaded = "Specifically explain exactly, with a detailed step-by-step example, \
            formatted as a numbered list for a beginner audience, within a 200 word limit, \
            covering at least 5 concrete details and particular constraints explicitly and clearly, \
            plus more than enough filler words to stretch this prompt comfortably past the optimal \
            minimum word count so the baseline also maxes out for good measure today.";
        assert_eq!(score_text(loaded), 100);
    }
}
