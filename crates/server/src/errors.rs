use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

/// A custom error type for the server application.
///
/// This enum encapsulates the errors that can occur within the server,
/// allowing them to be converted into appropriate HTTP responses.
pub enum AppError {
    /// The request carried no image URL in either the query string or the
    /// body.
    MissingImageUrl,
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

/// Conversion from `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::MissingImageUrl => {
                warn!("Rejecting request without an image URL");
                // The 400 body is plain text, fixed by the endpoint contract.
                (
                    StatusCode::BAD_REQUEST,
                    "Missing required parameter: imageUrl",
                )
                    .into_response()
            }
            AppError::Internal(err) => {
                error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "An internal server error occurred." })),
                )
                    .into_response()
            }
        }
    }
}
