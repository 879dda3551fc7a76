//! Public prediction entry points
//!
//! Both functions are pure over their arguments. Catalogs are immutable
//! statics, so any number of calls can run at once; [`predict_many`] does
//! exactly that with rayon.

use super::aggregator::aggregate_daily;
use super::DailyPrediction;
use crate::core_types::geo::Coordinate;
use crate::core_types::weather::HourlyWeatherSample;
use crate::corridor::{classify_corridor, is_coastal, Corridor};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

/// Location facts resolved once per query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocationProfile {
    pub corridor: Option<Corridor>,
    pub coastal: bool,
}

impl LocationProfile {
    pub fn of(coord: Coordinate) -> Self {
        Self {
            corridor: classify_corridor(coord),
            coastal: is_coastal(coord),
        }
    }
}

/// Score a forecast series for one location.
///
/// `samples` must be time-ordered with trends already derived (see
/// [`crate::core_types::weather::derive_trends`]). `now` is only used for
/// the confidence tag.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use fallout_core::{generate_predictions, Coordinate, HourlyWeatherSample};
///
/// let high_island = Coordinate::new(29.5647, -94.3912).unwrap();
/// let now = Utc.with_ymd_and_hms(2025, 4, 20, 0, 0, 0).unwrap();
/// let series = vec![HourlyWeatherSample::new(now)];
///
/// let predictions = generate_predictions(high_island, &series, now);
/// assert_eq!(predictions.len(), 1);
/// assert_eq!(predictions[0].overall_score, 0);
/// ```
pub fn generate_predictions(
    coord: Coordinate,
    samples: &[HourlyWeatherSample],
    now: DateTime<Utc>,
) -> Vec<DailyPrediction> {
    let profile = LocationProfile::of(coord);
    aggregate_daily(samples, profile.corridor, profile.coastal, now)
}

/// One location's input to [`predict_many`]
#[derive(Debug, Clone, Copy)]
pub struct LocationQuery<'a> {
    pub coordinate: Coordinate,
    pub samples: &'a [HourlyWeatherSample],
}

/// Score many locations in parallel.
///
/// Output order matches `queries`; every query sees the same `now`.
pub fn predict_many(queries: &[LocationQuery<'_>], now: DateTime<Utc>) -> Vec<Vec<DailyPrediction>> {
    info!(locations = queries.len(), "scoring locations");
    queries
        .par_iter()
        .map(|query| generate_predictions(query.coordinate, query.samples, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::units::{HectopascalDelta, Percent};
    use chrono::{Duration, TimeZone};

    fn stormy_day(start: DateTime<Utc>) -> Vec<HourlyWeatherSample> {
        (0..24)
            .map(|h| HourlyWeatherSample {
                pressure_delta_3h: Some(HectopascalDelta::new(-0.25 * h as f64)),
                precipitation_probability: Some(Percent::new(60.0)),
                is_frontal_passage: h > 12,
                ..HourlyWeatherSample::new(start + Duration::hours(h))
            })
            .collect()
    }

    #[test]
    fn test_profile_resolution() {
        let cape_may = LocationProfile::of(Coordinate::new(38.9331, -74.9597).unwrap());
        assert_eq!(cape_may.corridor, Some(Corridor::Atlantic));
        assert!(cape_may.coastal);

        let denver = LocationProfile::of(Coordinate::new(39.7392, -104.9903).unwrap());
        assert_eq!(denver.corridor, None);
        assert!(!denver.coastal);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let now = Utc.with_ymd_and_hms(2025, 4, 25, 0, 0, 0).unwrap();
        let series = stormy_day(now);
        let coords = [
            Coordinate::new(29.5647, -94.3912).unwrap(),
            Coordinate::new(41.9628, -82.5181).unwrap(),
            Coordinate::new(39.7392, -104.9903).unwrap(),
        ];
        let queries: Vec<_> = coords
            .iter()
            .map(|&coordinate| LocationQuery {
                coordinate,
                samples: &series,
            })
            .collect();

        let parallel = predict_many(&queries, now);
        let sequential: Vec<_> = coords
            .iter()
            .map(|&c| generate_predictions(c, &series, now))
            .collect();
        assert_eq!(parallel, sequential);

        // Gulf Coast spring boost separates the first location from the others.
        assert!(parallel[0][0].overall_score > parallel[2][0].overall_score);
    }
}
