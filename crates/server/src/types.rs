use serde::{Deserialize, Serialize};
use vistag::TagPrediction;

/// Query parameters accepted by the tags endpoint.
#[derive(Debug, Deserialize, Default)]
pub struct TagQuery {
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

/// The JSON body accepted on POST as an alternative to the query parameter.
#[derive(Debug, Deserialize)]
pub struct TagBody {
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

/// The response body of the tags endpoint.
#[derive(Serialize, Deserialize)]
pub struct TagResponse {
    pub predictions: Vec<TagPrediction>,
}
