//! Barometric pressure pattern

use super::{FactorKey, FactorScore, ScoringContext};
use crate::core_types::weather::HourlyWeatherSample;

const DAILY_DROP_HPA: f64 = -5.0;
const DAILY_DROP_POINTS: u32 = 4;

const LOW_PRESSURE_HPA: f64 = 1005.0;
const LOW_PRESSURE_POINTS: u32 = 3;

/// Score the pressure pattern (0-10): a 24h fall and a low absolute reading
/// each add points independently.
pub fn pressure_score(sample: &HourlyWeatherSample, _ctx: &ScoringContext) -> FactorScore {
    let mut score = 0;

    if sample.pressure_delta_24h.is_some_and(|d| *d < DAILY_DROP_HPA) {
        score += DAILY_DROP_POINTS;
    }
    if sample.pressure_msl.is_some_and(|p| *p < LOW_PRESSURE_HPA) {
        score += LOW_PRESSURE_POINTS;
    }

    FactorScore::capped(FactorKey::Pressure, score, &[], "Pressure pattern")
}
