//! Report assembly: predictor output plus display features → verdict.

mod reasons;
pub mod render;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::features::FeatureSet;
use crate::predictor::PredictionResponse;

pub use reasons::{confidence_summary, feature_details};

/// Combined result of one successful analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub is_phishing: bool,
    /// Predicted-class probability as a rounded percentage.
    pub confidence: u32,
    /// Confidence summary first, then per-feature lines.
    pub reasons: Vec<String>,
    pub features: FeatureSet,
    pub probabilities: BTreeMap<String, f64>,
}

impl AnalysisReport {
    pub fn verdict(&self) -> &'static str {
        if self.is_phishing {
            "Potential Phishing"
        } else {
            "Appears Safe"
        }
    }

    /// Rows for the per-class probability breakdown, in label order.
    pub fn probability_rows(&self) -> Vec<ProbabilityRow> {
        self.probabilities
            .iter()
            .map(|(label, &p)| ProbabilityRow {
                label: label.clone(),
                percent: to_percent(p),
                is_predicted: label_matches_verdict(label, self.is_phishing),
            })
            .collect()
    }
}

/// One line of the probability breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbabilityRow {
    pub label: String,
    pub percent: u32,
    /// Label names the class the verdict picked.
    pub is_predicted: bool,
}

fn label_matches_verdict(label: &str, is_phishing: bool) -> bool {
    if is_phishing {
        label == "phishing" || label == "bad"
    } else {
        label == "legitimate" || label == "good"
    }
}

/// Rounds a [0, 1] probability to a whole percentage; NaN and negatives become 0.
pub fn to_percent(p: f64) -> u32 {
    let pct = (p * 100.0).round();
    if pct.is_nan() || pct <= 0.0 {
        0
    } else {
        pct as u32
    }
}

/// Builds the report for one analysis.
pub fn assemble(features: FeatureSet, prediction: &PredictionResponse) -> AnalysisReport {
    let is_phishing = prediction.is_phishing();
    let confidence = to_percent(prediction.probability);

    let mut reasons = Vec::with_capacity(11);
    reasons.push(confidence_summary(is_phishing, confidence).to_string());
    reasons.extend(feature_details(&features));

    AnalysisReport {
        is_phishing,
        confidence,
        reasons,
        features,
        probabilities: prediction.probabilities.clone(),
    }
}
