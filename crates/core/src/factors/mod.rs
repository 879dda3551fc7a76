//! Weather factor scoring
//!
//! Five independent scorers each turn one hourly sample into a capped
//! sub-score plus a short explanation:
//!
//! | Factor        | Max | Driven by                                  |
//! |---------------|-----|--------------------------------------------|
//! | front         | 30  | frontal flag, 3h pressure drop, 24h cooling |
//! | wind          | 25  | seasonal headwind strength, gusts          |
//! | precipitation | 20  | rain probability, amount, coastal rain     |
//! | pressure      | 10  | 24h pressure drop, low absolute pressure   |
//! | visibility    | 10  | low visibility, low cloud deck             |
//!
//! A sixth catalog entry, temperature (max 5), is display metadata only; no
//! scorer computes it.
//!
//! Every branch only adds points, and a missing reading never meets a
//! condition, so scorers cannot fail.

pub mod front;
pub mod precipitation;
pub mod pressure;
pub mod visibility;
pub mod wind;

use crate::core_types::weather::HourlyWeatherSample;
use crate::season::Season;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use front::front_score;
pub use precipitation::precipitation_score;
pub use pressure::pressure_score;
pub use visibility::visibility_score;
pub use wind::wind_score;

/// Identifier of a scoring factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKey {
    Front,
    Wind,
    Precipitation,
    Pressure,
    Visibility,
    Temperature,
}

impl FactorKey {
    pub fn as_str(self) -> &'static str {
        match self {
            FactorKey::Front => "front",
            FactorKey::Wind => "wind",
            FactorKey::Precipitation => "precipitation",
            FactorKey::Pressure => "pressure",
            FactorKey::Visibility => "visibility",
            FactorKey::Temperature => "temperature",
        }
    }

    /// Parse a catalog key (`"front"`, `"wind"`, ...)
    pub fn parse(key: &str) -> Option<Self> {
        FACTOR_CATALOG
            .iter()
            .find(|info| info.key.as_str() == key)
            .map(|info| info.key)
    }

    /// Catalog entry for this factor
    pub fn info(self) -> &'static FactorInfo {
        // FACTOR_CATALOG lists every key exactly once, in declaration order.
        &FACTOR_CATALOG[self as usize]
    }

    pub fn max_score(self) -> u32 {
        self.info().max_score
    }
}

impl fmt::Display for FactorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation metadata for one factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FactorInfo {
    pub key: FactorKey,
    pub label: &'static str,
    pub max_score: u32,
}

/// Factor catalog used to draw proportional score bars
pub static FACTOR_CATALOG: [FactorInfo; 6] = [
    FactorInfo {
        key: FactorKey::Front,
        label: "Front Passage",
        max_score: 30,
    },
    FactorInfo {
        key: FactorKey::Wind,
        label: "Wind",
        max_score: 25,
    },
    FactorInfo {
        key: FactorKey::Precipitation,
        label: "Precipitation",
        max_score: 20,
    },
    FactorInfo {
        key: FactorKey::Pressure,
        label: "Pressure",
        max_score: 10,
    },
    FactorInfo {
        key: FactorKey::Visibility,
        label: "Visibility",
        max_score: 10,
    },
    FactorInfo {
        key: FactorKey::Temperature,
        label: "Temperature",
        max_score: 5,
    },
];

/// Fallback bar scale for keys missing from the catalog
pub const UNKNOWN_FACTOR_MAX_SCORE: u32 = 30;

/// Sum of every catalog maximum, including the unscored temperature factor
pub const MAX_TOTAL_SCORE: u32 = 30 + 25 + 20 + 10 + 10 + 5;

/// Max score for a factor key string, or [`UNKNOWN_FACTOR_MAX_SCORE`].
pub fn factor_max_score_by_name(key: &str) -> u32 {
    FactorKey::parse(key).map_or(UNKNOWN_FACTOR_MAX_SCORE, FactorKey::max_score)
}

/// Per-query context shared by every scorer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringContext {
    /// Season of the day being scored
    pub season: Season,
    /// Location passes the coarse coastal test
    pub coastal: bool,
}

/// A capped sub-score and its explanation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorScore {
    pub score: u32,
    pub description: String,
}

impl FactorScore {
    /// Cap `raw` at the factor's maximum and join the triggered reasons with
    /// `"; "`, falling back to `default` when none triggered.
    pub(crate) fn capped(key: FactorKey, raw: u32, reasons: &[String], default: &str) -> Self {
        let description = if reasons.is_empty() {
            default.to_string()
        } else {
            reasons.join("; ")
        };
        Self {
            score: raw.min(key.max_score()),
            description,
        }
    }

    /// Score scaled to 0-1 against the factor's catalog maximum
    pub fn fraction_of(&self, key: FactorKey) -> f64 {
        f64::from(self.score) / f64::from(key.max_score())
    }
}

/// Signature shared by all five scorers
pub type FactorScorer = fn(&HourlyWeatherSample, &ScoringContext) -> FactorScore;

/// The scorers run for every day, in output order
pub const SCORED_FACTORS: [(FactorKey, FactorScorer); 5] = [
    (FactorKey::Front, front_score),
    (FactorKey::Wind, wind_score),
    (FactorKey::Precipitation, precipitation_score),
    (FactorKey::Pressure, pressure_score),
    (FactorKey::Visibility, visibility_score),
];

/// The five computed factor scores for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorScores {
    pub front: FactorScore,
    pub wind: FactorScore,
    pub precipitation: FactorScore,
    pub pressure: FactorScore,
    pub visibility: FactorScore,
}

impl FactorScores {
    /// Run every scorer against one sample.
    pub fn evaluate(sample: &HourlyWeatherSample, ctx: &ScoringContext) -> Self {
        Self {
            front: front_score(sample, ctx),
            wind: wind_score(sample, ctx),
            precipitation: precipitation_score(sample, ctx),
            pressure: pressure_score(sample, ctx),
            visibility: visibility_score(sample, ctx),
        }
    }

    /// Sum of the five sub-scores
    pub fn total(&self) -> u32 {
        self.iter().map(|(_, factor)| factor.score).sum()
    }

    /// Factors in catalog order, keyed
    pub fn iter(&self) -> impl Iterator<Item = (FactorKey, &FactorScore)> {
        [
            (FactorKey::Front, &self.front),
            (FactorKey::Wind, &self.wind),
            (FactorKey::Precipitation, &self.precipitation),
            (FactorKey::Pressure, &self.pressure),
            (FactorKey::Visibility, &self.visibility),
        ]
        .into_iter()
    }

    pub fn get(&self, key: FactorKey) -> Option<&FactorScore> {
        self.iter().find(|(k, _)| *k == key).map(|(_, factor)| factor)
    }
}
