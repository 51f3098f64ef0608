//! Prediction API error type.

use thiserror::Error;

/// Failure of a single predictor call. Nothing here is retried.
#[derive(Debug, Error)]
pub enum PredictError {
    /// Request could not be sent or the response could not be received.
    #[error("network error: {0}")]
    Transport(#[from] curl::Error),
    /// Service answered with a non-2xx status.
    #[error("Prediction API error: {0}")]
    Status(u32),
    /// 2xx response whose body is not the expected JSON.
    #[error("invalid response from prediction API: {0}")]
    Decode(#[from] serde_json::Error),
}

impl PredictError {
    /// HTTP status for [`PredictError::Status`], otherwise None.
    pub fn status(&self) -> Option<u32> {
        match self {
            PredictError::Status(code) => Some(*code),
            PredictError::Transport(_) | PredictError::Decode(_) => None,
        }
    }
}
