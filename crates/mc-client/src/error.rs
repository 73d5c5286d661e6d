//! Error types for the prediction client.

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The service answered with a non-success status.
    #[error("API error: {status} {status_text}")]
    Api { status: u16, status_text: String },

    /// The request never reached the service.
    #[error(
        "API server not reachable at {endpoint}. Please ensure the prediction service is running ({detail})"
    )]
    Unreachable { endpoint: String, detail: String },

    /// The service answered 2xx but the body was not usable.
    #[error("Malformed prediction response: {0}")]
    MalformedResponse(String),

    #[error("Failed to encode request payload: {0}")]
    Encode(#[from] serde_json::Error),
}
