//! Cold front passage
//!
//! Migrants flying into an advancing cold front meet falling pressure,
//! sudden cooling and a wind shift; this is the classic fallout trigger and
//! carries the largest share of the score.

use super::{FactorKey, FactorScore, ScoringContext};
use crate::core_types::weather::HourlyWeatherSample;
use crate::season::Season;

const FRONTAL_FLAG_POINTS: u32 = 10;

/// 3h drop steeper than this earns [`RAPID_DROP_POINTS`]
const RAPID_DROP_HPA: f64 = -4.0;
const RAPID_DROP_POINTS: u32 = 12;

/// 3h drop steeper than this (but not rapid) earns [`FALLING_POINTS`]
const FALLING_HPA: f64 = -2.0;
const FALLING_POINTS: u32 = 8;

const SPRING_COOLING_C: f64 = -8.0;
const FALL_COOLING_C: f64 = -6.0;
const COOLING_POINTS: u32 = 5;

/// Score frontal activity (0-30).
pub fn front_score(sample: &HourlyWeatherSample, ctx: &ScoringContext) -> FactorScore {
    let mut score = 0;
    let mut reasons = Vec::new();

    if sample.is_frontal_passage {
        score += FRONTAL_FLAG_POINTS;
        reasons.push("Frontal passage".to_string());
    }

    if let Some(delta) = sample.pressure_delta_3h {
        if *delta < RAPID_DROP_HPA {
            score += RAPID_DROP_POINTS;
            reasons.push("Rapid pressure drop".to_string());
        } else if *delta < FALLING_HPA {
            score += FALLING_POINTS;
        }
    }

    if let Some(cooling) = sample.temperature_delta_24h {
        match ctx.season {
            Season::Spring if *cooling < SPRING_COOLING_C => {
                score += COOLING_POINTS;
                reasons.push(format!("Cooling {:.0}°C", cooling.round()));
            }
            Season::Fall if *cooling < FALL_COOLING_C => {
                score += COOLING_POINTS;
            }
            _ => {}
        }
    }

    FactorScore::capped(FactorKey::Front, score, &reasons, "No frontal activity")
}
