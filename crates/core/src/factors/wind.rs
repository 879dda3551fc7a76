//! Headwinds against the seasonal migration direction
//!
//! Spring migrants fly north, so northerly winds oppose them; fall migrants
//! fly south into southerlies. Outside those seasons no wind counts as a
//! headwind. Strong gusts add points regardless of direction.

use super::{FactorKey, FactorScore, ScoringContext};
use crate::core_types::units::Degrees;
use crate::core_types::weather::HourlyWeatherSample;
use crate::season::Season;

const STRONG_KMH: f64 = 40.0;
const STRONG_POINTS: u32 = 15;
const MODERATE_KMH: f64 = 25.0;
const MODERATE_POINTS: u32 = 10;
const LIGHT_KMH: f64 = 15.0;
const LIGHT_POINTS: u32 = 5;

const GUST_KMH: f64 = 50.0;
const GUST_POINTS: u32 = 5;

/// Whether wind from `direction` opposes migration in `season`.
///
/// Spring: north quadrant (≥315° or ≤45°). Fall: south quadrant
/// (135°-225° inclusive).
pub fn is_headwind(direction: Degrees, season: Season) -> bool {
    let dir = *direction;
    match season {
        Season::Spring => dir >= 315.0 || dir <= 45.0,
        Season::Fall => (135.0..=225.0).contains(&dir),
        Season::Summer | Season::Winter => false,
    }
}

/// Score wind conditions (0-25).
///
/// A calm (zero) or missing speed, or a missing direction, is treated as no
/// wind data and scores nothing, gusts included.
pub fn wind_score(sample: &HourlyWeatherSample, ctx: &ScoringContext) -> FactorScore {
    let (speed, direction) = match (sample.wind_speed_10m, sample.wind_direction_10m) {
        (Some(speed), Some(direction)) if *speed != 0.0 => (speed, direction),
        _ => {
            return FactorScore {
                score: 0,
                description: "No wind data".to_string(),
            }
        }
    };

    let mut score = 0;
    let mut reasons = Vec::new();

    if is_headwind(direction, ctx.season) {
        if *speed >= STRONG_KMH {
            score += STRONG_POINTS;
            reasons.push(format!("Strong headwind {:.0}km/h", speed.round()));
        } else if *speed >= MODERATE_KMH {
            score += MODERATE_POINTS;
        } else if *speed >= LIGHT_KMH {
            score += LIGHT_POINTS;
        }
    }

    if sample.wind_gusts_10m.is_some_and(|gust| *gust >= GUST_KMH) {
        score += GUST_POINTS;
    }

    FactorScore::capped(FactorKey::Wind, score, &reasons, "Favorable winds")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::units::KilometersPerHour;
    use chrono::{TimeZone, Utc};

    fn windy(speed: f64, direction: f64) -> HourlyWeatherSample {
        HourlyWeatherSample {
            wind_speed_10m: Some(KilometersPerHour::new(speed)),
            wind_direction_10m: Some(Degrees::new(direction)),
            ..HourlyWeatherSample::new(Utc.with_ymd_and_hms(2025, 5, 2, 3, 0, 0).unwrap())
        }
    }

    fn ctx(season: Season) -> ScoringContext {
        ScoringContext {
            season,
            coastal: true,
        }
    }

    #[test]
    fn test_spring_northerly_is_headwind() {
        let wind = wind_score(&windy(45.0, 0.0), &ctx(Season::Spring));
        assert_eq!(wind.score, 15);
        assert_eq!(wind.description, "Strong headwind 45km/h");

        let tailwind = wind_score(&windy(45.0, 180.0), &ctx(Season::Spring));
        assert_eq!(tailwind.score, 0);
        assert_eq!(tailwind.description, "Favorable winds");
    }

    #[test]
    fn test_speed_tiers() {
        assert_eq!(wind_score(&windy(30.0, 200.0), &ctx(Season::Fall)).score, 10);
        assert_eq!(wind_score(&windy(15.0, 135.0), &ctx(Season::Fall)).score, 5);
        assert_eq!(wind_score(&windy(14.9, 225.0), &ctx(Season::Fall)).score, 0);
    }

    #[test]
    fn test_headwind_quadrants() {
        assert!(is_headwind(Degrees::new(315.0), Season::Spring));
        assert!(is_headwind(Degrees::new(45.0), Season::Spring));
        assert!(!is_headwind(Degrees::new(46.0), Season::Spring));
        assert!(is_headwind(Degrees::new(225.0), Season::Fall));
        assert!(!is_headwind(Degrees::new(226.0), Season::Fall));
        assert!(!is_headwind(Degrees::new(0.0), Season::Winter));
        assert!(!is_headwind(Degrees::new(180.0), Season::Summer));
    }

    #[test]
    fn test_gusts_count_without_headwind() {
        let s = HourlyWeatherSample {
            wind_gusts_10m: Some(KilometersPerHour::new(55.0)),
            ..windy(20.0, 90.0)
        };
        let wind = wind_score(&s, &ctx(Season::Spring));
        assert_eq!(wind.score, 5);
        assert_eq!(wind.description, "Favorable winds");

        let s = HourlyWeatherSample {
            wind_gusts_10m: Some(KilometersPerHour::new(80.0)),
            ..windy(60.0, 350.0)
        };
        assert_eq!(wind_score(&s, &ctx(Season::Spring)).score, 20);
    }

    #[test]
    fn test_missing_or_calm_wind_is_no_data() {
        let mut s = windy(30.0, 0.0);
        s.wind_direction_10m = None;
        assert_eq!(wind_score(&s, &ctx(Season::Spring)).description, "No wind data");

        let calm = HourlyWeatherSample {
            wind_gusts_10m: Some(KilometersPerHour::new(60.0)),
            ..windy(0.0, 0.0)
        };
        let wind = wind_score(&calm, &ctx(Season::Spring));
        assert_eq!(wind.score, 0);
        assert_eq!(wind.description, "No wind data");
    }
}
