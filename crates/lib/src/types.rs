use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Which classifier produced a prediction: the generic vision-tagging
/// service or the custom-trained one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagSource {
    Default,
    Custom,
}

/// A single labeled classification result with a confidence score.
///
/// Created once per upstream response item and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagPrediction {
    pub probability: f64,
    pub tag_name: String,
    pub source: TagSource,
}

/// Combines the two result sets into the final ranked list.
///
/// Each group is sorted by probability descending on its own, and the custom
/// group always precedes the generic group. This is a fixed policy, not a
/// global sort: a custom prediction outranks a generic one even when its
/// numeric probability is lower.
pub fn merge_predictions(
    mut custom: Vec<TagPrediction>,
    mut generic: Vec<TagPrediction>,
) -> Vec<TagPrediction> {
    sort_by_probability(&mut custom);
    sort_by_probability(&mut generic);
    custom.extend(generic);
    custom
}

/// Stable descending sort. NaN probabilities never come out of the
/// providers, so ties on incomparable values are left in place.
fn sort_by_probability(predictions: &mut [TagPrediction]) {
    predictions.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(Ordering::Equal)
    });
}
