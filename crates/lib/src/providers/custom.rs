use crate::{
    errors::TaggerError,
    providers::TagProvider,
    types::{TagPrediction, TagSource},
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use tracing::debug;

// --- Prediction-API request and response structures ---
//
// The custom classifier speaks a structurally different contract from the
// analyze API (field names, header name, response shape), so the two
// providers intentionally share no wire types.

#[derive(Serialize)]
struct PredictionRequest<'a> {
    #[serde(rename = "Url")]
    url: &'a str,
}

#[derive(Deserialize, Debug)]
struct PredictionResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    tag_name: String,
    probability: f64,
}

// --- Provider implementation ---

/// A provider for the custom-trained prediction service.
#[derive(Clone, Debug)]
pub struct CustomVisionProvider {
    client: ReqwestClient,
    endpoint: String,
    prediction_key: String,
    min_probability: f64,
}

impl CustomVisionProvider {
    /// Creates a new `CustomVisionProvider`.
    ///
    /// Unlike the analyze API, `endpoint` is the full prediction URL and is
    /// posted to as-is.
    pub fn new(
        endpoint: String,
        prediction_key: String,
        min_probability: f64,
    ) -> Result<Self, TaggerError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(TaggerError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            endpoint,
            prediction_key,
            min_probability,
        })
    }
}

#[async_trait]
impl TagProvider for CustomVisionProvider {
    async fn fetch_tags(&self, image_url: &str) -> Result<Vec<TagPrediction>, TaggerError> {
        debug!(image_url, "Calling custom prediction service");
        let response = self
            .client
            .post(&self.endpoint)
            .header("Prediction-Key", &self.prediction_key)
            .json(&PredictionRequest { url: image_url })
            .send()
            .await
            .map_err(TaggerError::Request)?;

        if !response.status().is_success() {
            return Err(TaggerError::UpstreamStatus(response.status()));
        }

        let prediction_response: PredictionResponse = response
            .json()
            .await
            .map_err(TaggerError::Deserialization)?;

        Ok(prediction_response
            .predictions
            .into_iter()
            .filter(|prediction| prediction.probability >= self.min_probability)
            .map(|prediction| TagPrediction {
                probability: prediction.probability,
                tag_name: prediction.tag_name,
                source: TagSource::Custom,
            })
            .collect())
    }

    fn source(&self) -> TagSource {
        TagSource::Custom
    }
}
