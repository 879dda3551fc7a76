//! Property sweeps over randomized forecasts
//!
//! A seeded RNG generates forecasts with arbitrary gaps and nulls at random
//! coordinates; every prediction must satisfy the engine's output contract.
//!
//! Run tests with: cargo test --test prediction_invariants

use chrono::{DateTime, Duration, TimeZone, Utc};
use fallout_core::core_types::units::{
    Celsius, Degrees, Hectopascals, KilometersPerHour, Meters, Millimeters, Percent,
};
use fallout_core::corridor::{classify_corridor, corridor_multiplier};
use fallout_core::factors::{FactorKey, MAX_TOTAL_SCORE};
use fallout_core::prediction::aggregator::final_score;
use fallout_core::prediction::summarize;
use fallout_core::season::classify_season;
use fallout_core::{
    derive_trends, generate_predictions, predict_many, Coordinate, HourlyWeatherSample,
    LocationQuery, ScoreLabel,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

const SEED: u64 = 0x0FA1_1007;
const ROUNDS: usize = 200;

fn maybe<T>(rng: &mut StdRng, value: impl FnOnce(&mut StdRng) -> T) -> Option<T> {
    if rng.random_bool(0.85) {
        Some(value(rng))
    } else {
        None
    }
}

fn random_sample(rng: &mut StdRng, time: DateTime<Utc>) -> HourlyWeatherSample {
    HourlyWeatherSample {
        temperature_2m: maybe(rng, |r| Celsius::new(r.random_range(-20.0..40.0))),
        wind_speed_10m: maybe(rng, |r| KilometersPerHour::new(r.random_range(0.0..90.0))),
        wind_direction_10m: maybe(rng, |r| Degrees::new(r.random_range(0.0..360.0))),
        wind_gusts_10m: maybe(rng, |r| KilometersPerHour::new(r.random_range(0.0..120.0))),
        pressure_msl: maybe(rng, |r| Hectopascals::new(r.random_range(980.0..1040.0))),
        precipitation_probability: maybe(rng, |r| Percent::new(r.random_range(0.0..=100.0))),
        precipitation_mm: maybe(rng, |r| Millimeters::new(r.random_range(0.0..30.0))),
        cloud_cover_low: maybe(rng, |r| Percent::new(r.random_range(0.0..=100.0))),
        visibility_m: maybe(rng, |r| Meters::new(r.random_range(50.0..50_000.0))),
        ..HourlyWeatherSample::new(time)
    }
}

/// Ordered series of up to ten days, with occasional skipped hours
fn random_series(rng: &mut StdRng) -> (DateTime<Utc>, Vec<HourlyWeatherSample>) {
    let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
        + Duration::hours(rng.random_range(0..24 * 365));
    let hours = rng.random_range(0..240);

    let mut time = start;
    let mut series = Vec::with_capacity(hours);
    for _ in 0..hours {
        series.push(random_sample(rng, time));
        time += Duration::hours(if rng.random_bool(0.05) { 3 } else { 1 });
    }
    derive_trends(&mut series);
    (start, series)
}

fn random_coordinate(rng: &mut StdRng) -> Coordinate {
    // Bias toward North America so the corridors are exercised.
    if rng.random_bool(0.7) {
        Coordinate::new(rng.random_range(20.0..50.0), rng.random_range(-125.0..-65.0)).unwrap()
    } else {
        Coordinate::new(rng.random_range(-90.0..=90.0), rng.random_range(-180.0..=180.0)).unwrap()
    }
}

#[test]
fn test_output_contract_holds_for_random_forecasts() {
    let mut rng = StdRng::seed_from_u64(SEED);

    for round in 0..ROUNDS {
        let (now, series) = random_series(&mut rng);
        let coord = random_coordinate(&mut rng);
        let predictions = generate_predictions(coord, &series, now);

        let days: BTreeSet<_> = series.iter().map(|s| s.forecast_time.date_naive()).collect();
        assert_eq!(predictions.len(), days.len(), "round {round}");

        for pair in predictions.windows(2) {
            assert!(pair[0].prediction_date < pair[1].prediction_date, "round {round}");
        }

        for prediction in &predictions {
            assert!(prediction.overall_score <= 100, "round {round}");
            assert_eq!(prediction.score_label, ScoreLabel::from_score(prediction.overall_score));
            assert_eq!(
                prediction.summary,
                summarize(prediction.overall_score, prediction.score_label)
            );

            for (key, factor) in prediction.factors.iter() {
                assert!(factor.score <= key.max_score(), "{key} over cap in round {round}");
            }
            assert!(prediction.factors.total() <= MAX_TOTAL_SCORE);

            let season = classify_season(prediction.prediction_date);
            assert_eq!(prediction.season, season.season);
            assert_eq!(prediction.migration_type, season.migration_type);

            let multiplier = corridor_multiplier(classify_corridor(coord), prediction.season);
            assert_eq!(
                prediction.overall_score,
                final_score(prediction.factors.total(), multiplier),
                "round {round}"
            );
        }
    }
}

#[test]
fn test_engine_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(SEED ^ 1);

    for _ in 0..ROUNDS / 4 {
        let (now, series) = random_series(&mut rng);
        let coord = random_coordinate(&mut rng);
        assert_eq!(
            generate_predictions(coord, &series, now),
            generate_predictions(coord, &series, now)
        );
    }
}

#[test]
fn test_trend_derivation_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(SEED ^ 2);

    for _ in 0..ROUNDS / 4 {
        let (_, series) = random_series(&mut rng);
        let mut again = series.clone();
        derive_trends(&mut again);
        assert_eq!(again, series);

        for sample in &series {
            assert_eq!(
                sample.is_frontal_passage,
                sample.pressure_delta_3h.is_some_and(|d| *d < -3.0)
            );
        }
    }
}

#[test]
fn test_parallel_scoring_matches_serial() {
    let mut rng = StdRng::seed_from_u64(SEED ^ 3);
    let inputs: Vec<_> = (0..32)
        .map(|_| {
            let (_, series) = random_series(&mut rng);
            (random_coordinate(&mut rng), series)
        })
        .collect();
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();

    let queries: Vec<_> = inputs
        .iter()
        .map(|(coordinate, samples)| LocationQuery {
            coordinate: *coordinate,
            samples,
        })
        .collect();
    let parallel = predict_many(&queries, now);

    for ((coord, series), result) in inputs.iter().zip(&parallel) {
        assert_eq!(result, &generate_predictions(*coord, series, now));
    }
}

#[test]
fn test_temperature_is_catalog_only() {
    let mut rng = StdRng::seed_from_u64(SEED ^ 4);
    let (now, series) = random_series(&mut rng);
    let predictions = generate_predictions(random_coordinate(&mut rng), &series, now);

    for prediction in &predictions {
        assert!(prediction.factors.get(FactorKey::Temperature).is_none());
        assert_eq!(prediction.factors.iter().count(), 5);
    }
    assert_eq!(FactorKey::Temperature.max_score(), 5);
}
