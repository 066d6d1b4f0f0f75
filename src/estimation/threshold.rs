use crate::estimation::band::ScoreBand;
use crate::estimation::{Estimate, GrantEstimator, StrategyKind};
use crate::types::score::ConfidenceTier;

pub const MIN_PROBABILITY: f64 = 1.0;
pub const MAX_PROBABILITY: f64 = 99.0;

/// Policy B: piecewise scoring of the gap to a single passing threshold.
///
/// | gap            | probability              | tier   |
/// |----------------|--------------------------|--------|
/// | `>= 20`        | 95                       | High   |
/// | `10..20`       | `80 + (gap - 10) * 1.5`  | High   |
/// | `0..10`        | `50 + gap * 3`           | Medium |
/// | `-10 < gap < 0`| `20 + (10 + gap) * 2`    | Low    |
/// | `<= -10`       | 5                        | Low    |
///
/// The result is clamped to `[1, 99]` and then rounded half away from zero.
/// Any band max is ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThresholdGap;

impl GrantEstimator for ThresholdGap {
    fn estimate(&self, effective_score: i32, band: &ScoreBand) -> Estimate {
        let score_gap = effective_score - i32::from(band.min());
        let gap = f64::from(score_gap);

        let (raw, confidence_tier) = match score_gap {
            g if g >= 20 => (95.0, ConfidenceTier::High),
            g if g >= 10 => (80.0 + (gap - 10.0) * 1.5, ConfidenceTier::High),
            g if g >= 0 => (50.0 + gap * 3.0, ConfidenceTier::Medium),
            g if g > -10 => (20.0 + (10.0 + gap) * 2.0, ConfidenceTier::Low),
            _ => (5.0, ConfidenceTier::Low),
        };

        Estimate {
            probability_percent: raw.clamp(MIN_PROBABILITY, MAX_PROBABILITY).round() as u8,
            confidence_tier,
            score_gap,
            strategy: StrategyKind::ThresholdGap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_gap(gap: i32) -> Estimate {
        let band = ScoreBand::threshold(100).unwrap();
        ThresholdGap.estimate(100 + gap, &band)
    }

    #[test]
    fn piecewise_segments() {
        assert_eq!(at_gap(25).probability_percent, 95);
        assert_eq!(at_gap(10).probability_percent, 80);
        assert_eq!(at_gap(13).probability_percent, 85); // 84.5 rounds up
        assert_eq!(at_gap(19).probability_percent, 94);
        assert_eq!(at_gap(0).probability_percent, 50);
        assert_eq!(at_gap(9).probability_percent, 77);
        assert_eq!(at_gap(-1).probability_percent, 38);
        assert_eq!(at_gap(-9).probability_percent, 22);
        assert_eq!(at_gap(-10).probability_percent, 5);
    }

    #[test]
    fn tiers_follow_gap_not_probability() {
        assert_eq!(at_gap(10).confidence_tier, ConfidenceTier::High);
        assert_eq!(at_gap(9).confidence_tier, ConfidenceTier::Medium);
        assert_eq!(at_gap(0).confidence_tier, ConfidenceTier::Medium);
        assert_eq!(at_gap(-1).confidence_tier, ConfidenceTier::Low);
    }

    #[test]
    fn max_score_is_ignored() {
        let with_max = ScoreBand::new(100, Some(140)).unwrap();
        let without = ScoreBand::threshold(100).unwrap();
        assert_eq!(ThresholdGap.estimate(105, &with_max), ThresholdGap.estimate(105, &without));
    }
}
