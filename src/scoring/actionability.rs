//! Actionability dimension scorer
//!
//! Rewards directive phrasing: action verbs anywhere in the text, a
//! large bonus for opening with one, a bonus for naming a goal or
//! outcome, plus a length baseline.

use super::length_baseline;
use crate::keywords::{count_matches, starts_with_entry, ACTIONABILITY_KEYWORDS};
use crate::lexical::TextSignals;
use regex::Regex;
use std::sync::OnceLock;

static GOAL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn goal_pattern() -> &'static Regex {
    GOAL_PATTERN.get_or_init(|| {
        Regex::new(r"\b(goal|outcome|result|achieve|aim|objective|purpose|target)\b")
            .expect("valid regex")
    })
}

const LEADING_VERB_BONUS: usize = 30;
const GOAL_BONUS: usize = 20;

pub(super) fn score(lower: &str, signals: &TextSignals) -> u8 {
    let verb_hits = count_matches(lower, ACTIONABILITY_KEYWORDS);
    let leading_verb = starts_with_entry(lower, ACTIONABILITY_KEYWORDS);
    let has_goal = goal_pattern().is_match(lower);

    let raw = (verb_hits * 10
        + if leading_verb { LEADING_VERB_BONUS } else { 0 }
        + if has_goal { GOAL_BONUS } else { 0 }) as f64
        + length_baseline(signals.word_count, 20.0);

    raw.round().min(100.0) as u8
}
