//! Bird Fallout Prediction Core Library
//!
//! Scores how likely a migratory-bird fallout is at a location on each day
//! of an hourly weather forecast. Every day gets a 0-100 score built from
//! weather factors (frontal passage, opposing winds, rain, pressure trend,
//! visibility), adjusted for the migration corridor and season.
//!
//! ## Pipeline
//!
//! - [`open_meteo`] shapes a forecast response into ordered hourly samples
//! - [`core_types::weather::derive_trends`] fills in pressure and temperature deltas
//! - [`generate_predictions`] picks each day's most eventful hour and scores it
//! - [`planner`] ranks hotspots and builds the multi-day trip matrix
//!
//! The engine is pure: the same samples and `now` always give the same
//! predictions, and catalogs are immutable statics shared across threads.

// Core types and utilities
pub mod core_types;
pub mod error;

// Location and calendar context
pub mod corridor;
pub mod hotspots;
pub mod season;

// Scoring
pub mod factors;
pub mod prediction;

// Forecast input and multi-site views
pub mod open_meteo;
pub mod planner;

// Re-export core types
pub use core_types::{derive_trends, Coordinate, HourlyWeatherSample};
pub use error::{FalloutError, Result};

// Re-export scoring types
pub use corridor::Corridor;
pub use factors::{FactorKey, FactorScore, FactorScores};
pub use hotspots::{Hotspot, FALLOUT_HOTSPOTS};
pub use prediction::{
    generate_predictions, predict_many, Confidence, DailyPrediction, LocationQuery, ScoreLabel,
};
pub use season::{MigrationType, Season};

// Re-export planner types
pub use planner::{score_hotspots, top_predictions, HotspotPredictions, TripPlan};
