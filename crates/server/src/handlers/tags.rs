//! # Tag Aggregation Handler
//!
//! The handler for the `/tags` endpoint: resolve the image URL from the
//! request, fan out to both classifiers, and return the merged list.

use super::{AppError, AppState};
use crate::types::{TagBody, TagQuery, TagResponse};
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::Method,
    Json,
};
use tracing::{info, warn};
use vistag::aggregate_tags;

/// The handler for the `/tags` endpoint (GET and POST).
///
/// The image URL is taken from the `imageUrl` query parameter or, on POST
/// only, from an `imageUrl` field in a JSON body. Upstream degradation never
/// surfaces here: the aggregation is fail-soft per branch, so the response
/// is always 200 once a URL has been resolved.
pub async fn tags_handler(
    State(app_state): State<AppState>,
    method: Method,
    Query(params): Query<TagQuery>,
    body: Bytes,
) -> Result<Json<TagResponse>, AppError> {
    let image_url = resolve_image_url(&method, params, &body).ok_or(AppError::MissingImageUrl)?;

    info!(%image_url, "Processing image URL");
    let predictions = aggregate_tags(
        app_state.generic_provider.as_ref(),
        app_state.custom_provider.as_ref(),
        &image_url,
    )
    .await;

    Ok(Json(TagResponse { predictions }))
}

/// The query parameter wins; the body is only consulted on POST. An empty
/// value counts as absent, and a body that fails to parse as JSON is logged
/// and treated as absent too.
fn resolve_image_url(method: &Method, params: TagQuery, body: &Bytes) -> Option<String> {
    if let Some(url) = params.image_url.filter(|url| !url.is_empty()) {
        return Some(url);
    }
    if *method != Method::POST {
        return None;
    }
    match serde_json::from_slice::<TagBody>(body) {
        Ok(parsed) => parsed.image_url.filter(|url| !url.is_empty()),
        Err(e) => {
            warn!(error = %e, "Failed to parse JSON body");
            None
        }
    }
}
