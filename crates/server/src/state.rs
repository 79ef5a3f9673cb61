//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the
//! logic for building it at startup. The state holds the configuration and
//! the two instantiated classifier providers, making them accessible to all
//! request handlers.

use crate::config::AppConfig;
use std::sync::Arc;
use vistag::providers::{AnalyzeVisionProvider, CustomVisionProvider, TagProvider};

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration, loaded from the environment.
    pub config: Arc<AppConfig>,
    /// The generic vision-tagging provider.
    pub generic_provider: Arc<dyn TagProvider>,
    /// The custom-trained classifier provider.
    pub custom_provider: Arc<dyn TagProvider>,
}

/// Builds the shared application state from the configuration.
///
/// Both classifier clients are instantiated here, so a missing endpoint or
/// key is a startup error rather than a per-request surprise.
pub fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let cv_endpoint = config.cv_endpoint.clone().ok_or_else(|| {
        anyhow::anyhow!("CV_ENDPOINT is required for the generic vision service")
    })?;
    let cv_key = config
        .cv_key
        .clone()
        .ok_or_else(|| anyhow::anyhow!("CV_KEY is required for the generic vision service"))?;
    let generic_provider = AnalyzeVisionProvider::new(cv_endpoint, cv_key, config.cv_floor())?;

    let cp_endpoint = config.cp_endpoint.clone().ok_or_else(|| {
        anyhow::anyhow!("CP_ENDPOINT is required for the custom classifier")
    })?;
    let cp_prediction_key = config.cp_prediction_key.clone().ok_or_else(|| {
        anyhow::anyhow!("CP_PREDICTION_KEY is required for the custom classifier")
    })?;
    let custom_provider =
        CustomVisionProvider::new(cp_endpoint, cp_prediction_key, config.cp_floor())?;

    Ok(AppState {
        config: Arc::new(config),
        generic_provider: Arc::new(generic_provider),
        custom_provider: Arc::new(custom_provider),
    })
}
