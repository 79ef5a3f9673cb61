//! # Application Configuration
//!
//! This module defines the configuration structure for the `vistag-server`
//! and the logic for loading it from environment variables. Values are read
//! once at startup and treated as read-only for the process lifetime.

use config::{Config as ConfigBuilder, ConfigError, Environment};
use serde::Deserialize;
use tracing::warn;

/// Probability floor applied when the environment does not provide a usable
/// override.
pub const DEFAULT_MIN_PROBABILITY: f64 = 0.65;

/// The application configuration, populated from the environment.
///
/// Endpoint and key fields stay optional here; `build_app_state` turns a
/// missing one into a startup error with a pointed message. The floor fields
/// are kept raw and resolved leniently by [`resolve_min_probability`].
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT`.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Base URL of the generic vision service. Loaded from `CV_ENDPOINT`.
    #[serde(default)]
    pub cv_endpoint: Option<String>,
    /// API key for the generic vision service. Loaded from `CV_KEY`.
    #[serde(default)]
    pub cv_key: Option<String>,
    /// Raw probability floor for the generic service. Loaded from
    /// `CV_MIN_PROBABILITY`.
    #[serde(default)]
    pub cv_min_probability: Option<String>,
    /// Full prediction URL of the custom classifier. Loaded from
    /// `CP_ENDPOINT`.
    #[serde(default)]
    pub cp_endpoint: Option<String>,
    /// Key for the custom classifier. Loaded from `CP_PREDICTION_KEY`.
    #[serde(default)]
    pub cp_prediction_key: Option<String>,
    /// Raw probability floor for the custom classifier. Loaded from
    /// `CP_MIN_PROBABILITY`.
    #[serde(default)]
    pub cp_min_probability: Option<String>,
}

/// Provides a default value for the `port` field if not set in the environment.
fn default_port() -> u16 {
    9090
}

impl AppConfig {
    /// The resolved probability floor for the generic vision service.
    pub fn cv_floor(&self) -> f64 {
        resolve_min_probability(self.cv_min_probability.as_deref())
    }

    /// The resolved probability floor for the custom classifier.
    pub fn cp_floor(&self) -> f64 {
        resolve_min_probability(self.cp_min_probability.as_deref())
    }
}

/// Resolves a raw probability floor from the environment.
///
/// An absent, unparsable, or non-finite value falls back to
/// [`DEFAULT_MIN_PROBABILITY`] with a logged warning. A parsed floor of zero
/// or below is honored as configured and simply admits every prediction.
pub fn resolve_min_probability(raw: Option<&str>) -> f64 {
    match raw {
        None => DEFAULT_MIN_PROBABILITY,
        Some(value) => match value.trim().parse::<f64>() {
            Ok(floor) if floor.is_finite() => floor,
            _ => {
                warn!(value, "Unusable probability floor, falling back to default");
                DEFAULT_MIN_PROBABILITY
            }
        },
    }
}

/// Loads the application configuration from environment variables.
///
/// Top-level keys map directly to upper-cased variables: `PORT`,
/// `CV_ENDPOINT`, `CV_KEY`, `CV_MIN_PROBABILITY`, `CP_ENDPOINT`,
/// `CP_PREDICTION_KEY`, `CP_MIN_PROBABILITY`.
pub fn get_config() -> Result<AppConfig, ConfigError> {
    let settings = ConfigBuilder::builder()
        .add_source(Environment::default())
        .build()?;

    settings.try_deserialize()
}
