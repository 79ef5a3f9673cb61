use thiserror::Error;

/// Custom error types for the tagging providers.
#[derive(Error, Debug)]
pub enum TaggerError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to classification service: {0}")]
    Request(reqwest::Error),
    #[error("Classification service returned HTTP {0}")]
    UpstreamStatus(reqwest::StatusCode),
    #[error("Failed to deserialize classification service response: {0}")]
    Deserialization(reqwest::Error),
}
