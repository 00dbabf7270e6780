//! Prompt Quality Scoring System
//!
//! This module converts a raw prompt string into a multi-dimensional
//! quality score. Four independent dimension scorers each map the text
//! (plus lexical signals extracted once) to a 0-100 integer; a weighted
//! aggregate yields the overall score.
//!
//! # Scoring Formula
//!
//! ```text
//! Overall = Clarity × 0.35 + Length × 0.15 + Specificity × 0.25 + Actionability × 0.25
//!
//! Clarity       = clamp(65 + structure_bonuses - 15 × hedging_hits, 0, 100)
//! Length        = piecewise-linear over word count (bands at 15/40/200/500)
//! Specificity   = min(100, keywords × 12 + formats × 15 + indicators × 15 + baseline)
//! Actionability = min(100, verbs × 10 + leading_verb 30 + goals 20 + baseline)
//! ```
//!
//! # Properties
//!
//! - Deterministic: identical input always yields an identical score.
//! - Bounded: every field is an integer in [0, 100].
//! - Total: any `&str` scores; empty or whitespace-only input
//!   short-circuits to the all-zero score.
//!
//! All weights, band boundaries, and bonus magnitudes are fixed,
//! empirically chosen constants, not tunable parameters.

mod actionability;
mod clarity;
mod length;
mod specificity;

use crate::lexical::TextSignals;
use crate::models::{PromptAnalysis, PromptScore};
use tracing::debug;

/// Below this word count a prompt is considered too short (scores < 40)
pub const MIN_RECOMMENDED_WORDS: usize = 15;
/// Start of the optimal length band (length score 100)
pub const OPTIMAL_MIN_WORDS: usize = 40;
/// End of the optimal length band
pub const OPTIMAL_MAX_WORDS: usize = 200;
/// Beyond this word count the verbosity penalty steepens
pub const MAX_RECOMMENDED_WORDS: usize = 500;

/// Overall score weights; they sum to 1.0 so the aggregate needs no clamp
const CLARITY_WEIGHT: f64 = 0.35;
const LENGTH_WEIGHT: f64 = 0.15;
const SPECIFICITY_WEIGHT: f64 = 0.25;
const ACTIONABILITY_WEIGHT: f64 = 0.25;

/// Score a prompt across all four dimensions.
///
/// Pure and referentially transparent. Empty or whitespace-only input
/// returns [`PromptScore::ZERO`] before any scorer runs.
pub fn score_prompt(text: &str) -> PromptScore {
    if text.trim().is_empty() {
        return PromptScore::ZERO;
    }

    let signals = TextSignals::extract(text);
    let lower = text.to_lowercase();

    let clarity = clarity::score(&lower, &signals);
    let length = length::score(signals.word_count);
    let specificity = specificity::score(&lower, &signals);
    let actionability = actionability::score(&lower, &signals);

    let overall = (f64::from(clarity) * CLARITY_WEIGHT
        + f64::from(length) * LENGTH_WEIGHT
        + f64::from(specificity) * SPECIFICITY_WEIGHT
        + f64::from(actionability) * ACTIONABILITY_WEIGHT)
        .round() as u8;

    debug!(
        "Prompt score: overall={} (clarity={}, length={}, specificity={}, actionability={}, words={})",
        overall, clarity, length, specificity, actionability, signals.word_count
    );

    PromptScore {
        clarity,
        length,
        specificity,
        actionability,
        overall,
    }
}

/// Score a prompt and generate its improvement feedback in one call.
///
/// For empty or whitespace-only input the feedback string is empty, so
/// callers can suppress rendering without re-checking the text.
pub fn analyze(text: &str) -> PromptAnalysis {
    if text.trim().is_empty() {
        return PromptAnalysis {
            score: PromptScore::ZERO,
            feedback: String::new(),
        };
    }
    let score = score_prompt(text);
    let feedback = crate::feedback::prompt_feedback(&score);
    PromptAnalysis { score, feedback }
}

/// Length baseline shared by the specificity and actionability scorers:
/// full credit at the optimal word count, proportional below it.
fn length_baseline(word_count: usize, full_credit: f64) -> f64 {
    if word_count >= OPTIMAL_MIN_WORDS {
        full_credit
    } else {
        (word_count as f64 / OPTIMAL_MIN_WORDS as f64 * full_credit).round()
    }
}
