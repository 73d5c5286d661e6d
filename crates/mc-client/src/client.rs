//! The prediction client: one typed payload in, one forecast out.

use serde::Deserialize;

use mc_core::PredictionInput;

use crate::error::{ClientError, ClientResult};
use crate::transport::{ReqwestTransport, Transport};

pub const DEFAULT_ENDPOINT: &str = "https://manufacturing-output-api.onrender.com/predict";

/// Client for the remote prediction service.
pub struct PredictionClient<T: Transport> {
    endpoint: String,
    transport: T,
}

impl PredictionClient<ReqwestTransport> {
    pub fn new() -> ClientResult<Self> {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> ClientResult<Self> {
        let endpoint = endpoint.into();
        let transport = ReqwestTransport::new().map_err(|e| ClientError::Unreachable {
            endpoint: endpoint.clone(),
            detail: e.to_string(),
        })?;
        Ok(Self::with_transport(endpoint, transport))
    }
}

impl<T: Transport> PredictionClient<T> {
    pub fn with_transport(endpoint: impl Into<String>, transport: T) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit one parameter set and return the forecast parts-per-hour.
    pub fn predict(&self, input: &PredictionInput) -> ClientResult<f64> {
        let body = serde_json::to_string(input)?;
        tracing::debug!(endpoint = %self.endpoint, "submitting prediction request");

        let reply = self
            .transport
            .post_json(&self.endpoint, &body)
            .map_err(|e| ClientError::Unreachable {
                endpoint: self.endpoint.clone(),
                detail: e.to_string(),
            })?;

        if !reply.is_success() {
            return Err(ClientError::Api {
                status: reply.status,
                status_text: reply.status_text,
            });
        }

        let parsed: PredictionReply = serde_json::from_str(&reply.body)
            .map_err(|e| ClientError::MalformedResponse(e.to_string()))?;

        match parsed.predicted_parts_per_hour {
            Some(value) => {
                tracing::debug!(value, "prediction received");
                Ok(value)
            }
            None => Err(ClientError::MalformedResponse(
                "response is missing predicted_parts_per_hour".to_string(),
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PredictionReply {
    #[serde(default)]
    predicted_parts_per_hour: Option<f64>,
}
