use crate::{
    errors::TaggerError,
    providers::TagProvider,
    types::{TagPrediction, TagSource},
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use tracing::debug;

// --- Analyze-API request and response structures ---

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    url: &'a str,
}

#[derive(Deserialize, Debug)]
struct AnalyzeResponse {
    // The service omits the array entirely when it finds nothing.
    #[serde(default)]
    tags: Vec<AnalyzeTag>,
}

#[derive(Deserialize, Debug)]
struct AnalyzeTag {
    name: String,
    confidence: f64,
}

// --- Provider implementation ---

/// A provider for the generic vision-tagging service.
///
/// Tags come back from the `/vision/v2.0/analyze` endpoint as
/// `(name, confidence)` pairs and are stamped with [`TagSource::Default`].
#[derive(Clone, Debug)]
pub struct AnalyzeVisionProvider {
    client: ReqwestClient,
    endpoint: String,
    api_key: String,
    min_probability: f64,
}

impl AnalyzeVisionProvider {
    /// Creates a new `AnalyzeVisionProvider`.
    ///
    /// `endpoint` is the service base URL; the analyze path and its fixed
    /// query string are appended per request.
    pub fn new(
        endpoint: String,
        api_key: String,
        min_probability: f64,
    ) -> Result<Self, TaggerError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(TaggerError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            endpoint,
            api_key,
            min_probability,
        })
    }
}

#[async_trait]
impl TagProvider for AnalyzeVisionProvider {
    async fn fetch_tags(&self, image_url: &str) -> Result<Vec<TagPrediction>, TaggerError> {
        debug!(image_url, "Calling vision analyze API");
        let response = self
            .client
            .post(format!("{}/vision/v2.0/analyze", self.endpoint))
            .query(&[("visualFeatures", "Tags"), ("language", "en")])
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .json(&AnalyzeRequest { url: image_url })
            .send()
            .await
            .map_err(TaggerError::Request)?;

        if !response.status().is_success() {
            return Err(TaggerError::UpstreamStatus(response.status()));
        }

        let analyze_response: AnalyzeResponse = response
            .json()
            .await
            .map_err(TaggerError::Deserialization)?;

        // Upstream order is preserved here; ranking happens at the merge.
        Ok(analyze_response
            .tags
            .into_iter()
            .filter(|tag| tag.confidence >= self.min_probability)
            .map(|tag| TagPrediction {
                probability: tag.confidence,
                tag_name: tag.name,
                source: TagSource::Default,
            })
            .collect())
    }

    fn source(&self) -> TagSource {
        TagSource::Default
    }
}
