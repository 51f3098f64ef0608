//! One analysis attempt: normalize, predict, recompute features, assemble.

use thiserror::Error;

use crate::features::extract_features;
use crate::predictor::{PredictError, Predictor};
use crate::report::{assemble, AnalysisReport};
use crate::url_model::normalize_url;

/// Message shown when the input cannot be parsed as a URL.
pub const GENERIC_FAILURE: &str = "Failed to analyze URL. Please try again.";

/// Why an analysis attempt failed. Every variant is scoped to that attempt.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Failed to analyze URL. Please try again.")]
    InvalidUrl(#[source] url::ParseError),
    #[error(transparent)]
    Prediction(#[from] PredictError),
}

/// Runs the full pipeline for `input`.
///
/// The predictor sees the normalized URL. Display features are computed
/// afterwards from the raw input, so a URL the service accepted can still
/// fail here if it does not parse locally.
pub fn analyze(input: &str, predictor: &dyn Predictor) -> Result<AnalysisReport, AnalysisError> {
    let normalized = normalize_url(input);
    tracing::info!(input = %input.trim(), %normalized, "analyzing url");

    let prediction = predictor.predict(&normalized)?;

    let features = extract_features(input).map_err(|e| {
        tracing::warn!(error = %e, "url failed to parse for feature extraction");
        AnalysisError::InvalidUrl(e)
    })?;

    let report = assemble(features, &prediction);
    tracing::debug!(
        is_phishing = report.is_phishing,
        confidence = report.confidence,
        "report assembled"
    );
    Ok(report)
}
