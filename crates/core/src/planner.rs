//! Multi-site views: top sites for a day and the trip-planner matrix

use crate::core_types::weather::HourlyWeatherSample;
use crate::hotspots::Hotspot;
use crate::prediction::{predict_many, DailyPrediction, LocationQuery};
use chrono::{DateTime, NaiveDate, Utc};
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::collections::BTreeMap;

/// Predictions for one hotspot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotspotPredictions {
    pub hotspot: Hotspot,
    pub predictions: Vec<DailyPrediction>,
}

/// Score every hotspot's forecast in parallel, keeping input order.
pub fn score_hotspots(
    forecasts: Vec<(Hotspot, Vec<HourlyWeatherSample>)>,
    now: DateTime<Utc>,
) -> Vec<HotspotPredictions> {
    let queries: Vec<_> = forecasts
        .iter()
        .map(|(hotspot, samples)| LocationQuery {
            coordinate: hotspot.coordinate,
            samples,
        })
        .collect();
    let scored = predict_many(&queries, now);

    forecasts
        .into_iter()
        .zip(scored)
        .map(|((hotspot, _), predictions)| HotspotPredictions {
            hotspot,
            predictions,
        })
        .collect()
}

/// A hotspot's prediction chosen for ranking
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedPrediction<'a> {
    pub hotspot: &'a Hotspot,
    pub prediction: &'a DailyPrediction,
}

/// Best sites for a date, highest score first.
///
/// Each hotspot contributes its prediction for `date`, or its first
/// prediction when it has none for that date. Hotspots without predictions
/// are skipped. Equal scores keep input order.
pub fn top_predictions(
    sites: &[HotspotPredictions],
    date: NaiveDate,
    limit: usize,
) -> Vec<RankedPrediction<'_>> {
    let mut ranked: Vec<_> = sites
        .iter()
        .filter_map(|site| {
            let prediction = site
                .predictions
                .iter()
                .find(|p| p.prediction_date == date)
                .or_else(|| site.predictions.first())?;
            Some(RankedPrediction {
                hotspot: &site.hotspot,
                prediction,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.prediction.overall_score.cmp(&a.prediction.overall_score));
    ranked.truncate(limit);
    ranked
}

/// Consecutive planning days starting at `start`
pub fn planning_dates(start: NaiveDate, days: usize) -> Vec<NaiveDate> {
    start.iter_days().take(days).collect()
}

/// Highest-scoring cell found by a trip-plan scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestPick {
    pub hotspot: String,
    pub date: NaiveDate,
    pub score: u8,
}

/// One hotspot row of the trip planner; cells align with [`TripPlan::dates`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripPlanRow {
    pub hotspot: Hotspot,
    pub cells: Vec<Option<DailyPrediction>>,
}

/// Hotspot × date matrix with row, column and overall maxima.
///
/// Maxima only move on a strictly greater score, starting from zero: ties
/// keep the first cell scanned, and an all-zero row or column has no pick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripPlan {
    pub dates: Vec<NaiveDate>,
    pub rows: Vec<TripPlanRow>,
    pub best_overall: Option<BestPick>,
    pub best_by_date: BTreeMap<NaiveDate, Option<BestPick>>,
    pub best_by_hotspot: BTreeMap<String, Option<BestPick>>,
}

impl TripPlan {
    pub fn build(sites: &[HotspotPredictions], dates: Vec<NaiveDate>) -> Self {
        let rows: Vec<TripPlanRow> = sites
            .iter()
            .map(|site| {
                let by_date: FxHashMap<NaiveDate, &DailyPrediction> = site
                    .predictions
                    .iter()
                    .map(|p| (p.prediction_date, p))
                    .collect();
                TripPlanRow {
                    hotspot: site.hotspot.clone(),
                    cells: dates
                        .iter()
                        .map(|date| by_date.get(date).map(|p| (*p).clone()))
                        .collect(),
                }
            })
            .collect();

        // Overall and per-hotspot maxima scan every prediction, not only the
        // planning window.
        let mut best_overall = None;
        let mut best_by_hotspot = BTreeMap::new();
        for site in sites {
            let mut row_best = None;
            for prediction in &site.predictions {
                let pick = || BestPick {
                    hotspot: site.hotspot.name.to_string(),
                    date: prediction.prediction_date,
                    score: prediction.overall_score,
                };
                raise(&mut row_best, prediction.overall_score, pick);
                raise(&mut best_overall, prediction.overall_score, pick);
            }
            best_by_hotspot.insert(site.hotspot.name.to_string(), row_best);
        }

        let mut best_by_date = BTreeMap::new();
        for (column, date) in dates.iter().enumerate() {
            let mut column_best = None;
            for row in &rows {
                if let Some(prediction) = &row.cells[column] {
                    raise(&mut column_best, prediction.overall_score, || BestPick {
                        hotspot: row.hotspot.name.to_string(),
                        date: *date,
                        score: prediction.overall_score,
                    });
                }
            }
            best_by_date.insert(*date, column_best);
        }

        Self {
            dates,
            rows,
            best_overall,
            best_by_date,
            best_by_hotspot,
        }
    }
}

fn raise(best: &mut Option<BestPick>, score: u8, pick: impl FnOnce() -> BestPick) {
    let current = best.as_ref().map_or(0, |b| b.score);
    if score > current {
        *best = Some(pick());
    }
}
