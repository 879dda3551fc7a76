use fallout_core::{FactorKey, ScoreLabel};

/// Scoring factor identifiers, in catalog order.
/// Keep this layout stable for C/C++/C# consumers.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FalloutFactor {
    Front = 0,
    Wind = 1,
    Precipitation = 2,
    Pressure = 3,
    Visibility = 4,
    /// Listed for display; never scored.
    Temperature = 5,
}

impl From<FalloutFactor> for FactorKey {
    fn from(factor: FalloutFactor) -> Self {
        match factor {
            FalloutFactor::Front => FactorKey::Front,
            FalloutFactor::Wind => FactorKey::Wind,
            FalloutFactor::Precipitation => FactorKey::Precipitation,
            FalloutFactor::Pressure => FactorKey::Pressure,
            FalloutFactor::Visibility => FactorKey::Visibility,
            FalloutFactor::Temperature => FactorKey::Temperature,
        }
    }
}

/// Descriptive band of an overall score.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FalloutScoreLabel {
    Low = 0,
    Moderate = 1,
    Elevated = 2,
    High = 3,
    Exceptional = 4,
}

impl From<ScoreLabel> for FalloutScoreLabel {
    fn from(label: ScoreLabel) -> Self {
        match label {
            ScoreLabel::Low => FalloutScoreLabel::Low,
            ScoreLabel::Moderate => FalloutScoreLabel::Moderate,
            ScoreLabel::Elevated => FalloutScoreLabel::Elevated,
            ScoreLabel::High => FalloutScoreLabel::High,
            ScoreLabel::Exceptional => FalloutScoreLabel::Exceptional,
        }
    }
}

#[no_mangle]
/// Maximum points a factor can contribute, for drawing proportional bars.
pub extern "C" fn fallout_factor_max_score(factor: FalloutFactor) -> u32 {
    FactorKey::from(factor).max_score()
}

#[no_mangle]
/// Label for an overall score. Boundaries take the lower label
/// (20 is `Low`, 21 is `Moderate`); scores above 100 are `Exceptional`.
pub extern "C" fn fallout_score_label(score: u8) -> FalloutScoreLabel {
    ScoreLabel::from_score(score).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_caps() {
        assert_eq!(fallout_factor_max_score(FalloutFactor::Front), 30);
        assert_eq!(fallout_factor_max_score(FalloutFactor::Wind), 25);
        assert_eq!(fallout_factor_max_score(FalloutFactor::Temperature), 5);
    }

    #[test]
    fn test_score_labels() {
        assert_eq!(fallout_score_label(20), FalloutScoreLabel::Low);
        assert_eq!(fallout_score_label(60), FalloutScoreLabel::Elevated);
        assert_eq!(fallout_score_label(61), FalloutScoreLabel::High);
        assert_eq!(fallout_score_label(255), FalloutScoreLabel::Exceptional);
    }
}
