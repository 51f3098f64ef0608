//! Client side of the remote prediction API.
//!
//! The service takes `{"url": "..."}` on `POST /predict` and answers with a
//! label, the winning probability and the full per-class distribution. The
//! analysis layer only depends on the [`Predictor`] trait; [`HttpPredictor`]
//! is the libcurl-backed implementation.

mod error;
mod http;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use error::PredictError;
pub use http::HttpPredictor;

/// Label the service uses for phishing URLs.
pub const PHISHING_LABEL: &str = "bad";

/// Body of a successful `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Predicted class label, e.g. `"bad"` or `"good"`.
    pub prediction: String,
    /// Probability of the predicted class, in [0, 1].
    pub probability: f64,
    /// Probability per class label.
    #[serde(default)]
    pub probabilities: BTreeMap<String, f64>,
}

impl PredictionResponse {
    pub fn is_phishing(&self) -> bool {
        self.prediction == PHISHING_LABEL
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
}

/// Request body for `POST /predict`.
#[derive(Debug, Serialize)]
pub(crate) struct PredictRequest<'a> {
    pub url: &'a str,
}

/// Anything that can classify a scheme-qualified URL.
pub trait Predictor {
    fn predict(&self, url: &str) -> Result<PredictionResponse, PredictError>;

    fn health(&self) -> Result<HealthStatus, PredictError>;
}
