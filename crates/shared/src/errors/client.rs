use reqwest::StatusCode;
use thiserror::Error;

/// Failures of an outbound HTTP lookup against another service.
#[derive(Debug, Error)]
pub enum HttpClientError {
    /// The request never produced a response (connect, timeout, body read).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("Lookup failed: upstream responded with {0}")]
    UnexpectedStatus(StatusCode),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}
