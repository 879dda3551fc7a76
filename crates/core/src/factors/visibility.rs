//! Visibility and low cloud
//!
//! Fog and a low cloud deck take away the visual cues night migrants use,
//! pushing them to land at first light.

use super::{FactorKey, FactorScore, ScoringContext};
use crate::core_types::weather::HourlyWeatherSample;

const POOR_VISIBILITY_M: f64 = 3000.0;
const POOR_VISIBILITY_POINTS: u32 = 4;

const LOW_CLOUD_PERCENT: f64 = 80.0;
const LOW_CLOUD_POINTS: u32 = 3;

/// Score visibility (0-10).
pub fn visibility_score(sample: &HourlyWeatherSample, _ctx: &ScoringContext) -> FactorScore {
    let mut score = 0;

    if sample.visibility_m.is_some_and(|v| *v < POOR_VISIBILITY_M) {
        score += POOR_VISIBILITY_POINTS;
    }
    if sample.cloud_cover_low.is_some_and(|c| *c >= LOW_CLOUD_PERCENT) {
        score += LOW_CLOUD_POINTS;
    }

    FactorScore::capped(FactorKey::Visibility, score, &[], "Visibility")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::units::{Meters, Percent};
    use crate::season::Season;
    use chrono::{TimeZone, Utc};

    fn sample(visibility: Option<f64>, low_cloud: Option<f64>) -> HourlyWeatherSample {
        HourlyWeatherSample {
            visibility_m: visibility.map(Meters::new),
            cloud_cover_low: low_cloud.map(Percent::new),
            ..HourlyWeatherSample::new(Utc.with_ymd_and_hms(2025, 9, 18, 6, 0, 0).unwrap())
        }
    }

    #[test]
    fn test_fog_and_low_deck() {
        let ctx = ScoringContext {
            season: Season::Fall,
            coastal: true,
        };
        assert_eq!(visibility_score(&sample(Some(800.0), Some(95.0)), &ctx).score, 7);
        assert_eq!(visibility_score(&sample(Some(3000.0), Some(80.0)), &ctx).score, 3);
        assert_eq!(visibility_score(&sample(Some(2999.0), None), &ctx).score, 4);
        assert_eq!(visibility_score(&sample(None, None), &ctx).score, 0);
    }
}
