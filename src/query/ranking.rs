use crate::types::query::GrantPrediction;

/// Orders predictions by probability, highest first.
///
/// The sort is stable: equal probabilities keep their dataset order.
pub fn rank(predictions: &mut [GrantPrediction]) {
    predictions.sort_by(|a, b| b.probability_percent.cmp(&a.probability_percent));

    debug_assert!(predictions
        .windows(2)
        .all(|w| w[0].probability_percent >= w[1].probability_percent));
}
