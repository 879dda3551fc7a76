//! Migration calendar
//!
//! Maps a calendar date to a migration season and the type of movement
//! expected then. The month partition is fixed:
//! - **Spring** (Mar-May): northbound neotropical migration
//! - **Summer** (Jun-Jul): post-breeding dispersal
//! - **Fall** (Aug-Nov): southbound neotropical migration
//! - **Winter** (Dec-Feb): irruptive movements only
//!
//! The [`MIGRATION_SEASONS`] catalog and the seasonal multiplier table are
//! static reference data for status displays. The daily scorer does not
//! apply the seasonal multiplier.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

/// Kind of bird movement expected in a season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MigrationType {
    /// Long-distance migrants between the tropics and North America
    Neotropical,
    /// Short, undirected post-breeding movement
    Dispersal,
    /// Irregular winter incursions driven by food supply
    Irruption,
}

/// Season and migration type for one date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonInfo {
    pub season: Season,
    pub migration_type: MigrationType,
}

/// Classify a date into its migration season.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use fallout_core::season::{classify_season, MigrationType, Season};
///
/// let info = classify_season(NaiveDate::from_ymd_opt(2025, 4, 28).unwrap());
/// assert_eq!(info.season, Season::Spring);
/// assert_eq!(info.migration_type, MigrationType::Neotropical);
/// ```
pub fn classify_season(date: NaiveDate) -> SeasonInfo {
    let season = Season::from_month(date.month());
    SeasonInfo {
        season,
        migration_type: season.migration_type(),
    }
}

impl Season {
    /// Season for a 1-based month number.
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            8..=11 => Season::Fall,
            12 | 1 | 2 => Season::Winter,
            // June and July; chrono months are always 1-12
            _ => Season::Summer,
        }
    }

    pub fn migration_type(self) -> MigrationType {
        match self {
            Season::Spring | Season::Fall => MigrationType::Neotropical,
            Season::Winter => MigrationType::Irruption,
            Season::Summer => MigrationType::Dispersal,
        }
    }

    /// Score dampening used by the season status display.
    ///
    /// Spring runs at full strength, fall fallouts are less dramatic, and the
    /// off-season is heavily suppressed.
    pub fn seasonal_multiplier(self) -> f64 {
        match self {
            Season::Spring => 1.0,
            Season::Fall => 0.85,
            Season::Winter | Season::Summer => 0.15,
        }
    }

    /// True for the two neotropical migration seasons
    pub fn is_active_migration(self) -> bool {
        matches!(self, Season::Spring | Season::Fall)
    }

    /// Catalog entry for this season
    pub fn catalog(self) -> &'static MigrationSeason {
        let index = match self {
            Season::Spring => 0,
            Season::Fall => 1,
            Season::Winter => 2,
            Season::Summer => 3,
        };
        &MIGRATION_SEASONS[index]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MigrationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MigrationType::Neotropical => "neotropical",
            MigrationType::Dispersal => "dispersal",
            MigrationType::Irruption => "irruption",
        })
    }
}

/// How likely a fallout is in a season given suitable weather
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FalloutLikelihood {
    High,
    Moderate,
    VeryLow,
}

/// A month/day pair, ordered by month then day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    pub const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    pub fn of(date: NaiveDate) -> Self {
        Self::new(date.month(), date.day())
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// Inclusive month/day span of peak fallout activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakWindow {
    pub start: MonthDay,
    pub end: MonthDay,
}

impl PeakWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        let md = MonthDay::of(date);
        self.start <= md && md <= self.end
    }
}

/// Static description of one migration season
#[derive(Debug, Clone, Serialize)]
pub struct MigrationSeason {
    pub season: Season,
    pub months: &'static [u32],
    pub label: &'static str,
    pub description: &'static str,
    pub peak_weeks: Option<PeakWindow>,
    pub fallout_likelihood: FalloutLikelihood,
}

/// Season catalog, in display order
pub static MIGRATION_SEASONS: [MigrationSeason; 4] = [
    MigrationSeason {
        season: Season::Spring,
        months: &[3, 4, 5],
        label: "Spring Migration",
        description: "Peak neotropical migration - trans-Gulf migrants heading north",
        peak_weeks: Some(PeakWindow {
            start: MonthDay::new(4, 15),
            end: MonthDay::new(5, 15),
        }),
        fallout_likelihood: FalloutLikelihood::High,
    },
    MigrationSeason {
        season: Season::Fall,
        months: &[8, 9, 10, 11],
        label: "Fall Migration",
        description: "Southbound migration - birds heading to wintering grounds",
        peak_weeks: Some(PeakWindow {
            start: MonthDay::new(9, 15),
            end: MonthDay::new(10, 31),
        }),
        fallout_likelihood: FalloutLikelihood::Moderate,
    },
    MigrationSeason {
        season: Season::Winter,
        months: &[12, 1, 2],
        label: "Winter",
        description: "Non-migration period - occasional irruptive species only",
        peak_weeks: None,
        fallout_likelihood: FalloutLikelihood::VeryLow,
    },
    MigrationSeason {
        season: Season::Summer,
        months: &[6, 7],
        label: "Summer",
        description: "Non-migration period - breeding season",
        peak_weeks: None,
        fallout_likelihood: FalloutLikelihood::VeryLow,
    },
];

/// True when the date falls inside its season's peak window.
pub fn is_in_peak_migration(date: NaiveDate) -> bool {
    Season::from_month(date.month())
        .catalog()
        .peak_weeks
        .is_some_and(|window| window.contains(date))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MigrationStatusKind {
    Peak,
    Active,
    OffSeason,
}

/// Headline migration status for a date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationStatus {
    pub status: MigrationStatusKind,
    pub season: Season,
    pub label: String,
    pub message: String,
}

/// Summarize where a date sits in the migration calendar.
pub fn migration_status(date: NaiveDate) -> MigrationStatus {
    let season = Season::from_month(date.month());
    let entry = season.catalog();

    if is_in_peak_migration(date) {
        return MigrationStatus {
            status: MigrationStatusKind::Peak,
            season,
            label: format!("Peak {}", entry.label),
            message: "Prime fallout conditions possible with right weather".to_string(),
        };
    }

    if season.is_active_migration() {
        return MigrationStatus {
            status: MigrationStatusKind::Active,
            season,
            label: entry.label.to_string(),
            message: entry.description.to_string(),
        };
    }

    MigrationStatus {
        status: MigrationStatusKind::OffSeason,
        season,
        label: "Off Season".to_string(),
        message: format!("{} - Fallouts unlikely regardless of weather", entry.label),
    }
}
