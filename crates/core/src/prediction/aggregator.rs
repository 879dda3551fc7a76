//! Per-day aggregation
//!
//! Each calendar day is represented by its most eventful hour. That hour is
//! scored by every factor, the sub-scores are summed, the corridor × season
//! multiplier is applied, and the result is clamped to 0-100.

use super::{summarize, Confidence, DailyPrediction, ScoreLabel};
use crate::core_types::weather::HourlyWeatherSample;
use crate::corridor::{corridor_multiplier, Corridor};
use crate::factors::{FactorScores, ScoringContext};
use crate::season::classify_season;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Upper bound of the overall score
pub const MAX_OVERALL_SCORE: f64 = 100.0;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Score an hourly series day by day.
///
/// Returns one prediction per distinct UTC calendar day in the input, in
/// ascending date order. An empty series yields no predictions.
pub fn aggregate_daily(
    samples: &[HourlyWeatherSample],
    corridor: Option<Corridor>,
    coastal: bool,
    now: DateTime<Utc>,
) -> Vec<DailyPrediction> {
    most_significant_by_day(samples)
        .into_iter()
        .map(|(date, best)| score_day(date, best, corridor, coastal, now))
        .collect()
}

/// The most significant sample of each UTC day.
///
/// Single pass over the series; a later sample replaces the current pick
/// only when strictly more significant, so ties keep the earliest hour.
pub fn most_significant_by_day(
    samples: &[HourlyWeatherSample],
) -> BTreeMap<NaiveDate, &HourlyWeatherSample> {
    let mut days: BTreeMap<NaiveDate, &HourlyWeatherSample> = BTreeMap::new();

    for sample in samples {
        let date = sample.forecast_time.date_naive();
        days.entry(date)
            .and_modify(|best| {
                if sample.significance() > best.significance() {
                    *best = sample;
                }
            })
            .or_insert(sample);
    }

    days
}

fn score_day(
    date: NaiveDate,
    best: &HourlyWeatherSample,
    corridor: Option<Corridor>,
    coastal: bool,
    now: DateTime<Utc>,
) -> DailyPrediction {
    trace!(
        %date,
        hour = %best.forecast_time,
        significance = best.significance(),
        "selected representative hour"
    );

    let season_info = classify_season(date);
    let ctx = ScoringContext {
        season: season_info.season,
        coastal,
    };

    let factors = FactorScores::evaluate(best, &ctx);
    let raw = factors.total();
    let multiplier = corridor_multiplier(corridor, season_info.season);
    let overall_score = final_score(raw, multiplier);

    let hours_ahead = (best.forecast_time - now).num_milliseconds() as f64 / MILLIS_PER_HOUR;
    let confidence = Confidence::from_hours_ahead(hours_ahead);
    let score_label = ScoreLabel::from_score(overall_score);

    debug!(
        %date,
        season = %season_info.season,
        raw,
        multiplier,
        overall_score,
        %confidence,
        "scored day"
    );

    DailyPrediction {
        prediction_date: date,
        overall_score,
        score_label,
        confidence,
        season: season_info.season,
        migration_type: season_info.migration_type,
        factors,
        summary: summarize(overall_score, score_label),
    }
}

/// `round(raw × multiplier)` clamped to 0-100.
pub fn final_score(raw: u32, multiplier: f64) -> u8 {
    (f64::from(raw) * multiplier)
        .round()
        .clamp(0.0, MAX_OVERALL_SCORE) as u8
}
