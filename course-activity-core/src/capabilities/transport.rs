use async_trait::async_trait;
use serde::Serialize;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A POST to a same-origin path with a serialized body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeaconRequest {
    pub path: String,
    pub content_type: &'static str,
    pub body: String,
}

impl BeaconRequest {
    pub fn json<T: Serialize>(path: impl Into<String>, payload: &T) -> Result<Self, TransportError> {
        Ok(Self {
            path: path.into(),
            content_type: JSON_CONTENT_TYPE,
            body: serde_json::to_string(payload)?,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Request could not be built: {0}")]
    InvalidRequest(String),

    #[error("Request failed: {0}")]
    SendFailed(String),
}

/// Outbound HTTP.
///
/// Implementations resolve once the request has been handed off or has
/// failed; response status and body are not inspected.
#[async_trait(?Send)]
pub trait Transport {
    async fn post(&self, request: BeaconRequest) -> Result<(), TransportError>;
}
