//! Core data models for promptgauge
//!
//! These models are the public output surface of the engine: the score
//! value object, the combined score-plus-feedback result, and the
//! presentation helpers UI consumers map scores through.

use serde::{Deserialize, Serialize};

/// Multi-dimensional quality score for a prompt.
///
/// Each field is an integer in `[0, 100]`. `overall` is derived by the
/// aggregator from the four dimension scores and is never set
/// independently. The struct is an immutable value object: scoring the
/// same text twice yields byte-identical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PromptScore {
    /// Direct, well-structured language (0-100)
    pub clarity: u8,
    /// Appropriate word count (0-100)
    pub length: u8,
    /// Concrete detail: keywords, numbers, context (0-100)
    pub specificity: u8,
    /// Directive, task-oriented phrasing (0-100)
    pub actionability: u8,
    /// Weighted aggregate of the four dimensions (0-100)
    pub overall: u8,
}

impl PromptScore {
    /// The all-zero score returned for empty or whitespace-only input.
    pub const ZERO: PromptScore = PromptScore {
        clarity: 0,
        length: 0,
        specificity: 0,
        actionability: 0,
        overall: 0,
    };

    /// Quality label for the overall score.
    pub fn label(&self) -> QualityLabel {
        QualityLabel::from_overall(self.overall)
    }
}

/// A score together with its generated feedback text.
///
/// For empty or whitespace-only input the feedback string is empty;
/// callers suppress rendering in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptAnalysis {
    pub score: PromptScore,
    pub feedback: String,
}

/// Human-readable quality tier derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QualityLabel {
    Poor,
    NeedsWork,
    Decent,
    Good,
    VeryGood,
    Excellent,
}

impl QualityLabel {
    /// Map an overall score to its tier.
    pub fn from_overall(overall: u8) -> Self {
        if overall >= 90 {
            QualityLabel::Excellent
        } else if overall >= 80 {
            QualityLabel::VeryGood
        } else if overall >= 70 {
            QualityLabel::Good
        } else if overall >= 60 {
            QualityLabel::Decent
        } else if overall >= 40 {
            QualityLabel::NeedsWork
        } else {
            QualityLabel::Poor
        }
    }
}

impl std::fmt::Display for QualityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QualityLabel::Excellent => write!(f, "Excellent"),
            QualityLabel::VeryGood => write!(f, "Very Good"),
            QualityLabel::Good => write!(f, "Good"),
            QualityLabel::Decent => write!(f, "Decent"),
            QualityLabel::NeedsWork => write!(f, "Needs Work"),
            QualityLabel::Poor => write!(f, "Poor"),
        }
    }
}

/// Coarse band for rendering any single dimension value.
///
/// UI consumers color progress bars by band: green at 80+, yellow at
/// 60-79, red below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Weak,
    Moderate,
    Strong,
}

impl ScoreBand {
    pub fn from_value(value: u8) -> Self {
        if value >= 80 {
            ScoreBand::Strong
        } else if value >= 60 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Weak
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_score_is_all_zero() {
        let z = PromptScore::ZERO;
        assert_eq!(z.clarity, 0);
        assert_eq!(z.length, 0);
        assert_eq!(z.specificity, 0);
        assert_eq!(z.actionability, 0);
        assert_eq!(z.overall, 0);
    }

    #[test]
    fn test_label_tiers() {
        assert_eq!(QualityLabel::from_overall(100), QualityLabel::Excellent);
        assert_eq!(QualityLabel::from_overall(90), QualityLabel::Excellent);
        assert_eq!(QualityLabel::from_overall(89), QualityLabel::VeryGood);
        assert_eq!(QualityLabel::from_overall(70), QualityLabel::Good);
        assert_eq!(QualityLabel::from_overall(60), QualityLabel::Decent);
        assert_eq!(QualityLabel::from_overall(59), QualityLabel::NeedsWork);
        assert_eq!(QualityLabel::from_overall(39), QualityLabel::Poor);
        assert_eq!(QualityLabel::from_overall(0), QualityLabel::Poor);
    }

    #[test]
    fn test_label_display_matches_ui_strings() {
        assert_eq!(QualityLabel::VeryGood.to_string(), "Very Good");
        assert_eq!(QualityLabel::NeedsWork.to_string(), "Needs Work");
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(ScoreBand::from_value(80), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_value(79), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_value(60), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_value(59), ScoreBand::Weak);
    }

    #[test]
    fn test_score_serializes_with_stable_field_names() {
        let score = PromptScore {
            clarity: 80,
            length: 100,
            specificity: 55,
            actionability: 70,
            overall: 76,
        };
        let json = serde_json::to_value(&score).unwrap();
        assert_eq!(json["clarity"], 80);
        assert_eq!(json["length"], 100);
        assert_eq!(json["specificity"], 55);
        assert_eq!(json["actionability"], 70);
        assert_eq!(json["overall"], 76);
    }
}
