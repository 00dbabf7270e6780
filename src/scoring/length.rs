//! Length dimension scorer
//!
//! Piecewise-linear curve over word count. Prompts in the 40-200 word
//! band score a flat 100; shorter prompts ramp up through two bands and
//! longer prompts are penalized for verbosity, down to 0 for extreme
//! lengths.

use super::{MAX_RECOMMENDED_WORDS, MIN_RECOMMENDED_WORDS, OPTIMAL_MAX_WORDS, OPTIMAL_MIN_WORDS};

pub(super) fn score(word_count: usize) -> u8 {
    let wc = word_count as f64;
    let min = MIN_RECOMMENDED_WORDS as f64;
    let opt_min = OPTIMAL_MIN_WORDS as f64;
    let opt_max = OPTIMAL_MAX_WORDS as f64;
    let max = MAX_RECOMMENDED_WORDS as f64;

    let raw = if word_count < MIN_RECOMMENDED_WORDS {
        // 0 -> 40 across the too-short band
        (wc / min * 40.0).round()
    } else if word_count < OPTIMAL_MIN_WORDS {
        // 40 -> 80 approaching the optimal band
        (40.0 + (wc - min) / (opt_min - min) * 40.0).round()
    } else if word_count <= OPTIMAL_MAX_WORDS {
        100.0
    } else if word_count <= MAX_RECOMMENDED_WORDS {
        // 100 -> 80 across the verbose band
        (100.0 - (wc - opt_max) / (max - opt_max) * 20.0).round()
    } else {
        // keeps falling past 500 words; floor each branch before the
        // final clamp so rounding cannot leak a negative through
        (80.0 - (wc - max) / 100.0 * 20.0).round().max(0.0)
    };

    raw.clamp(0.0, 100.0) as u8
}
