pub mod analyze;
pub mod custom;

use crate::{
    errors::TaggerError,
    types::{TagPrediction, TagSource},
};
use async_trait::async_trait;
use dyn_clone::DynClone;
pub use analyze::AnalyzeVisionProvider;
pub use custom::CustomVisionProvider;
use std::fmt::Debug;

/// A trait for interacting with an image-classification service.
///
/// This trait defines a common interface for fetching tag predictions for an
/// image URL from different upstream classifiers (the generic vision API and
/// the custom-trained prediction service).
#[async_trait]
pub trait TagProvider: Send + Sync + Debug + DynClone {
    /// Fetches the predictions for the given image URL, already filtered by
    /// the provider's probability floor and in the upstream's own order.
    async fn fetch_tags(&self, image_url: &str) -> Result<Vec<TagPrediction>, TaggerError>;

    /// The source label this provider stamps on its predictions.
    fn source(&self) -> TagSource;
}

dyn_clone::clone_trait_object!(TagProvider);
