use crate::estimation::band::ScoreBand;
use crate::estimation::{Estimate, GrantEstimator, StrategyKind};
use crate::types::score::ConfidenceTier;

/// Probability at or above the top of the band.
pub const BAND_CEILING_PROBABILITY: u8 = 95;
/// Probability at the bottom of the band.
pub const BAND_FLOOR_PROBABILITY: u8 = 25;
/// Width of the interpolated probability range (25..=90).
pub const BAND_SPAN: f64 = 65.0;
/// Starting probability below the band, before the gap penalty.
pub const BELOW_BAND_BASE: i32 = 15;
pub const BELOW_BAND_MIN_PROBABILITY: i32 = 5;
pub const BELOW_BAND_PENALTY_PER_POINT: i32 = 3;
pub const BELOW_BAND_MAX_PENALTY: i32 = 35;

pub const HIGH_TIER_FROM: u8 = 75;
pub const MEDIUM_TIER_FROM: u8 = 45;

/// Policy A: linear interpolation inside the `[min, max]` admission band.
///
/// - below `min`: `max(5, 15 - min(gap * 3, 35))`, Low
/// - at or above `max`: 95, High
/// - inside: `round(25 + position * 65)`, High from 75, Medium from 45
///
/// A threshold-only band behaves as a band of zero width.
#[derive(Debug, Default, Clone, Copy)]
pub struct BandInterpolation;

impl GrantEstimator for BandInterpolation {
    fn estimate(&self, effective_score: i32, band: &ScoreBand) -> Estimate {
        let min = i32::from(band.min());
        let max = i32::from(band.top());
        let score_gap = effective_score - min;

        let (probability_percent, confidence_tier) = if effective_score < min {
            let penalty = ((min - effective_score) * BELOW_BAND_PENALTY_PER_POINT)
                .min(BELOW_BAND_MAX_PENALTY);
            let probability = (BELOW_BAND_BASE - penalty).max(BELOW_BAND_MIN_PROBABILITY);
            (probability as u8, ConfidenceTier::Low)
        } else if effective_score >= max {
            (BAND_CEILING_PROBABILITY, ConfidenceTier::High)
        } else {
            let range = (max - min).max(1);
            let position = f64::from(effective_score - min) / f64::from(range);
            let probability =
                (f64::from(BAND_FLOOR_PROBABILITY) + position * BAND_SPAN).round() as u8;
            (probability, tier_for(probability))
        };

        Estimate {
            probability_percent,
            confidence_tier,
            score_gap,
            strategy: StrategyKind::BandInterpolation,
        }
    }
}

fn tier_for(probability: u8) -> ConfidenceTier {
    if probability >= HIGH_TIER_FROM {
        ConfidenceTier::High
    } else if probability >= MEDIUM_TIER_FROM {
        ConfidenceTier::Medium
    } else {
        ConfidenceTier::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(min: u8, max: u8) -> ScoreBand {
        ScoreBand::new(min, Some(max)).unwrap()
    }

    #[test]
    fn midpoint_of_band_is_medium() {
        let estimate = BandInterpolation.estimate(90, &band(70, 110));
        assert_eq!(estimate.probability_percent, 58);
        assert_eq!(estimate.confidence_tier, ConfidenceTier::Medium);
        assert_eq!(estimate.score_gap, 20);
    }

    #[test]
    fn bottom_of_band_starts_at_floor() {
        let estimate = BandInterpolation.estimate(70, &band(70, 110));
        assert_eq!(estimate.probability_percent, 25);
        assert_eq!(estimate.confidence_tier, ConfidenceTier::Low);
    }

    #[test]
    fn tier_boundaries() {
        // position 0.75 -> 73.75 -> 74 (Medium), 0.775 -> 75.375 -> 75 (High)
        assert_eq!(BandInterpolation.estimate(130, &band(100, 140)).confidence_tier, ConfidenceTier::Medium);
        assert_eq!(tier_for(75), ConfidenceTier::High);
        assert_eq!(tier_for(74), ConfidenceTier::Medium);
        assert_eq!(tier_for(45), ConfidenceTier::Medium);
        assert_eq!(tier_for(44), ConfidenceTier::Low);
    }

    #[test]
    fn zero_width_band_jumps_to_ceiling() {
        let b = band(70, 70);
        assert_eq!(BandInterpolation.estimate(70, &b).probability_percent, 95);
        assert_eq!(BandInterpolation.estimate(69, &b).probability_percent, 12);
    }
}
