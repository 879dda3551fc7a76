//! Rain over the flight path
//!
//! Rain forces migrants down, and coastal rain matters more because birds
//! finishing an over-water crossing have nowhere else to land.

use super::{FactorKey, FactorScore, ScoringContext};
use crate::core_types::weather::HourlyWeatherSample;

const HIGH_PROBABILITY: f64 = 80.0;
const HIGH_POINTS: u32 = 10;
const LIKELY_PROBABILITY: f64 = 50.0;
const LIKELY_POINTS: u32 = 6;

const HEAVY_RAIN_MM: f64 = 10.0;
const HEAVY_RAIN_POINTS: u32 = 5;

const COASTAL_PROBABILITY: f64 = 40.0;
const COASTAL_POINTS: u32 = 4;

/// Score precipitation (0-20).
///
/// Probability tier, heavy amount, and coastal rain are independent and
/// add up before the cap.
pub fn precipitation_score(sample: &HourlyWeatherSample, ctx: &ScoringContext) -> FactorScore {
    let mut score = 0;
    let mut reasons = Vec::new();
    let probability = sample.precipitation_probability;

    if let Some(prob) = probability {
        if *prob >= HIGH_PROBABILITY {
            score += HIGH_POINTS;
            reasons.push(format!("High rain prob {prob}"));
        } else if *prob >= LIKELY_PROBABILITY {
            score += LIKELY_POINTS;
        }
    }

    if sample.precipitation_mm.is_some_and(|mm| *mm >= HEAVY_RAIN_MM) {
        score += HEAVY_RAIN_POINTS;
    }

    if ctx.coastal && probability.is_some_and(|prob| *prob >= COASTAL_PROBABILITY) {
        score += COASTAL_POINTS;
    }

    FactorScore::capped(FactorKey::Precipitation, score, &reasons, "Dry")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::units::{Millimeters, Percent};
    use crate::season::Season;
    use chrono::{TimeZone, Utc};

    fn rainy(probability: Option<f64>, mm: Option<f64>) -> HourlyWeatherSample {
        HourlyWeatherSample {
            precipitation_probability: probability.map(Percent::new),
            precipitation_mm: mm.map(Millimeters::new),
            ..HourlyWeatherSample::new(Utc.with_ymd_and_hms(2025, 4, 10, 18, 0, 0).unwrap())
        }
    }

    fn ctx(coastal: bool) -> ScoringContext {
        ScoringContext {
            season: Season::Spring,
            coastal,
        }
    }

    #[test]
    fn test_coastal_downpour() {
        // 10 (probability >= 80) + 5 (>= 10mm) + 4 (coastal, >= 40%) = 19
        let precip = precipitation_score(&rainy(Some(85.0), Some(12.0)), &ctx(true));
        assert_eq!(precip.score, 19);
        assert_eq!(precip.description, "High rain prob 85%");
    }

    #[test]
    fn test_inland_gets_no_coastal_bonus() {
        let precip = precipitation_score(&rainy(Some(85.0), Some(12.0)), &ctx(false));
        assert_eq!(precip.score, 15);
    }

    #[test]
    fn test_probability_tiers() {
        let likely = precipitation_score(&rainy(Some(50.0), None), &ctx(false));
        assert_eq!(likely.score, 6);
        assert_eq!(likely.description, "Dry");

        // Coastal bonus alone at 40%
        assert_eq!(precipitation_score(&rainy(Some(40.0), None), &ctx(true)).score, 4);
        assert_eq!(precipitation_score(&rainy(Some(39.0), None), &ctx(true)).score, 0);
    }

    #[test]
    fn test_amount_without_probability() {
        let precip = precipitation_score(&rainy(None, Some(25.0)), &ctx(true));
        assert_eq!(precip.score, 5);
        assert_eq!(precip.description, "Dry");
    }
}
