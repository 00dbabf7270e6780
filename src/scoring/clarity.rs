//! Clarity dimension scorer
//!
//! Starts from a baseline of 65. Structural elements (lists, discourse
//! markers, questions, sentence variety) add up to 55; each distinct
//! hedging phrase subtracts 15, unbounded before the final clamp.

use crate::keywords::{count_matches, HEDGING_PHRASES};
use crate::lexical::TextSignals;

const BASELINE: i32 = 65;
const HEDGE_PENALTY: i32 = 15;

pub(super) fn score(lower: &str, signals: &TextSignals) -> u8 {
    let structure_bonus = i32::from(signals.has_list_markers) * 15
        + i32::from(signals.has_sections) * 15
        + i32::from(signals.has_questions) * 10
        + i32::from(signals.sentence_variety) * 15;

    let hedge_hits = count_matches(lower, HEDGING_PHRASES) as i32;

    (BASELINE + structure_bonus - hedge_hits * HEDGE_PENALTY).clamp(0, 100) as u8
}
