//! Daily fallout predictions
//!
//! [`pipeline::generate_predictions`] is the entry point; it resolves the
//! location once and hands the series to [`aggregator::aggregate_daily`],
//! which produces one [`DailyPrediction`] per calendar day.

pub mod aggregator;
pub mod pipeline;

use crate::factors::FactorScores;
use crate::season::{MigrationType, Season};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use aggregator::aggregate_daily;
pub use pipeline::{generate_predictions, predict_many, LocationProfile, LocationQuery};

/// Score thresholds (inclusive upper bound of each label)
///
/// Scores at a boundary take the lower label: 20 is Low, 21 is Moderate.
pub mod score_thresholds {
    pub const LOW: u8 = 20;
    pub const MODERATE: u8 = 40;
    pub const ELEVATED: u8 = 60;
    pub const HIGH: u8 = 80;

    /// Scores at or above this are described as "fallout potential"
    pub const FALLOUT_POTENTIAL: u8 = 60;
}

/// Descriptive band for an overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ScoreLabel {
    Low,
    Moderate,
    Elevated,
    High,
    Exceptional,
}

impl ScoreLabel {
    /// Label for an overall score.
    ///
    /// # Example
    /// ```
    /// use fallout_core::ScoreLabel;
    ///
    /// assert_eq!(ScoreLabel::from_score(60), ScoreLabel::Elevated);
    /// assert_eq!(ScoreLabel::from_score(61), ScoreLabel::High);
    /// ```
    pub fn from_score(score: u8) -> Self {
        use score_thresholds::{ELEVATED, HIGH, LOW, MODERATE};
        match score {
            s if s <= LOW => ScoreLabel::Low,
            s if s <= MODERATE => ScoreLabel::Moderate,
            s if s <= ELEVATED => ScoreLabel::Elevated,
            s if s <= HIGH => ScoreLabel::High,
            _ => ScoreLabel::Exceptional,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScoreLabel::Low => "Low",
            ScoreLabel::Moderate => "Moderate",
            ScoreLabel::Elevated => "Elevated",
            ScoreLabel::High => "High",
            ScoreLabel::Exceptional => "Exceptional",
        }
    }
}

impl fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Forecast reliability, from lead time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// ≤24h ahead is high, ≤72h medium, anything further low. Hours in the
    /// past count as high.
    pub fn from_hours_ahead(hours: f64) -> Self {
        if hours <= 24.0 {
            Confidence::High
        } else if hours <= 72.0 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        })
    }
}

/// One calendar day's fallout outlook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPrediction {
    /// UTC calendar day, serialized as `YYYY-MM-DD`
    pub prediction_date: NaiveDate,
    /// 0-100
    pub overall_score: u8,
    pub score_label: ScoreLabel,
    pub confidence: Confidence,
    pub season: Season,
    pub migration_type: MigrationType,
    pub factors: FactorScores,
    pub summary: String,
}

/// One-line summary for a score and its label.
pub fn summarize(score: u8, label: ScoreLabel) -> String {
    if score >= score_thresholds::FALLOUT_POTENTIAL {
        format!("{label} fallout potential.")
    } else {
        format!("{label} conditions.")
    }
}
