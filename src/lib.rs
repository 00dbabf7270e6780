//! Promptgauge - deterministic prompt quality scoring
//!
//! A pure, offline heuristic that converts a raw prompt string into a
//! multi-dimensional quality score plus human-readable improvement feedback.
//! Four independent dimension scorers (clarity, length, specificity,
//! actionability) each produce a 0-100 integer; a weighted aggregate yields
//! the overall score.
//!
//! The engine is referentially transparent: identical input text always
//! yields an identical [`PromptScore`]. There is no I/O, no shared mutable
//! state, and no failure mode - every `&str` (including the empty string)
//! scores successfully.
//!
//! # Example
//!
//! ```
//! use promptgauge::{analyze, score_prompt};
//!
//! let score = score_prompt("Write a 200 word product description for a smart lamp.");
//! assert!(score.overall <= 100);
//!
//! let analysis = analyze("write an email");
//! assert!(analysis.score.overall < 50);
//! assert!(!analysis.feedback.is_empty());
//! ```

mod feedback;
mod keywords;
mod lexical;
pub mod models;
pub mod scoring;

pub use feedback::prompt_feedback;
pub use models::{PromptAnalysis, PromptScore, QualityLabel, ScoreBand};
pub use scoring::{analyze, score_prompt};
