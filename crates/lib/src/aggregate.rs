//! # Fail-Soft Tag Aggregation
//!
//! This module runs the two classification calls concurrently and joins
//! their results. Each branch converts its own failure into an empty
//! contribution before the join point, so the aggregate itself never fails.

use crate::{
    providers::TagProvider,
    types::{merge_predictions, TagPrediction},
};
use tracing::warn;

/// Fetches tags from one provider, degrading to an empty contribution.
///
/// Any failure (transport, non-2xx status, malformed body) is logged and
/// swallowed here, so one broken upstream thins the result instead of
/// failing the whole request.
pub async fn fetch_tags_lenient(provider: &dyn TagProvider, image_url: &str) -> Vec<TagPrediction> {
    match provider.fetch_tags(image_url).await {
        Ok(tags) => tags,
        Err(e) => {
            warn!(
                source = ?provider.source(),
                error = %e,
                "Classification call failed, contributing no tags"
            );
            Vec::new()
        }
    }
}

/// Runs both classifiers concurrently and merges their contributions.
///
/// Both calls start before either completes, and the join waits for both to
/// finish: a fan-out/fan-in, not a race. Completion order never affects the
/// output, whose ordering comes entirely from [`merge_predictions`].
pub async fn aggregate_tags(
    generic: &dyn TagProvider,
    custom: &dyn TagProvider,
    image_url: &str,
) -> Vec<TagPrediction> {
    let (generic_tags, custom_tags) = tokio::join!(
        fetch_tags_lenient(generic, image_url),
        fetch_tags_lenient(custom, image_url),
    );

    merge_predictions(custom_tags, generic_tags)
}
