//! Lexical primitives
//!
//! Tokenization and pattern detection over the raw prompt text. Each
//! scoring call extracts one [`TextSignals`] value up front; the four
//! dimension scorers consume it without re-scanning the text.

use regex::Regex;
use std::sync::OnceLock;

static DATE_PATTERN: OnceLock<Regex> = OnceLock::new();
static UNIT_PATTERN: OnceLock<Regex> = OnceLock::new();
static LIST_MARKER_PATTERN: OnceLock<Regex> = OnceLock::new();
static SECTION_PATTERN: OnceLock<Regex> = OnceLock::new();
static SENTENCE_SPLIT_PATTERN: OnceLock<Regex> = OnceLock::new();

fn date_pattern() -> &'static Regex {
    DATE_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec|january|february|march|april|june|july|august|september|october|november|december|[0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4})\b")
            .expect("valid regex")
    })
}

fn unit_pattern() -> &'static Regex {
    UNIT_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\b\d+\s*(px|em|rem|cm|mm|m|kg|lb|hrs?|hours?|mins?|minutes?|secs?|seconds?)\b")
            .expect("valid regex")
    })
}

fn list_marker_pattern() -> &'static Regex {
    LIST_MARKER_PATTERN.get_or_init(|| {
        Regex::new(r"(\n\s*[-•*]\s|\d+\.\s)").expect("valid regex")
    })
}

fn section_pattern() -> &'static Regex {
    SECTION_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\b(first|second|third|finally|lastly|next|then|conclusion|summary|overview|introduction)\b")
            .expect("valid regex")
    })
}

fn sentence_split_pattern() -> &'static Regex {
    SENTENCE_SPLIT_PATTERN.get_or_init(|| Regex::new(r"[.!?]+").expect("valid regex"))
}

/// Signals extracted once per prompt and shared by all dimension scorers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextSignals {
    /// Non-empty tokens after splitting on whitespace runs
    pub word_count: usize,
    /// Any digit sequence present
    pub has_numbers: bool,
    /// Month name or d/d/yy style date present
    pub has_dates: bool,
    /// Digit followed by a unit abbreviation (px, cm, kg, hrs, ...)
    pub has_units: bool,
    /// Bulleted or numbered enumeration present
    pub has_list_markers: bool,
    /// Discourse markers present (first, next, finally, summary, ...)
    pub has_sections: bool,
    /// Contains a question mark
    pub has_questions: bool,
    /// Sentences vary in length or opening word (requires >= 2 sentences)
    pub sentence_variety: bool,
}

impl TextSignals {
    /// Extract all signals from the raw text.
    ///
    /// Pure and total: empty input yields `word_count = 0` and all
    /// booleans false.
    pub fn extract(text: &str) -> Self {
        TextSignals {
            word_count: text.split_whitespace().count(),
            has_numbers: text.chars().any(|c| c.is_ascii_digit()),
            has_dates: date_pattern().is_match(text),
            has_units: unit_pattern().is_match(text),
            has_list_markers: list_marker_pattern().is_match(text),
            has_sections: section_pattern().is_match(text),
            has_questions: text.contains('?'),
            sentence_variety: sentence_variety(text),
        }
    }
}

/// Detect varied sentence structure.
///
/// Splits on runs of `.`, `!`, `?` and requires at least two non-empty
/// sentences. Flags variety when any sentence's word count deviates from
/// the mean by more than 3, or when the sentences do not all open with
/// the same (case-insensitive) word. The OR of these two signals is
/// inherited behavior, kept as-is.
fn sentence_variety(text: &str) -> bool {
    let sentences: Vec<&str> = sentence_split_pattern()
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if sentences.len() < 2 {
        return false;
    }

    let lengths: Vec<usize> = sentences
        .iter()
        .map(|s| s.split_whitespace().count())
        .collect();
    let average = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;
    let has_length_variation = lengths
        .iter()
        .any(|&len| (len as f64 - average).abs() > 3.0);

    let mut starters = sentences
        .iter()
        .filter_map(|s| s.split_whitespace().next())
        .map(str::to_lowercase);
    let first = starters.next();
    let has_starter_variation = match first {
        Some(first) => starters.any(|s| s != first),
        None => false,
    };

    has_length_variation || has_starter_variation
}
