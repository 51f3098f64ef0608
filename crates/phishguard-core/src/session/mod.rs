//! Analysis session: at most one attempt in flight, latest outcome kept.
//!
//! Phases are `Idle` → `Loading` → `Settled`. Starting a new attempt clears
//! the previous outcome; settling replaces it wholesale. There is no
//! cancellation: re-entry while `Loading` is rejected instead.

mod analyze;

use thiserror::Error;

use crate::predictor::Predictor;
use crate::report::AnalysisReport;

pub use analyze::{analyze, AnalysisError, GENERIC_FAILURE};

/// Outcome of a settled attempt.
pub type Outcome = Result<AnalysisReport, AnalysisError>;

#[derive(Debug, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Settled(Outcome),
}

/// Reasons a new attempt could not be started.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no URL entered")]
    EmptyInput,
    #[error("an analysis is already in progress")]
    Busy,
    #[error("nothing to retry")]
    NothingToRetry,
}

#[derive(Debug, Default)]
pub struct AnalysisSession {
    phase: Phase,
    last_input: Option<String>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    pub fn last_input(&self) -> Option<&str> {
        self.last_input.as_deref()
    }

    /// Report of the latest attempt, if it succeeded.
    pub fn report(&self) -> Option<&AnalysisReport> {
        match &self.phase {
            Phase::Settled(Ok(report)) => Some(report),
            _ => None,
        }
    }

    /// Error of the latest attempt, if it failed.
    pub fn error(&self) -> Option<&AnalysisError> {
        match &self.phase {
            Phase::Settled(Err(e)) => Some(e),
            _ => None,
        }
    }

    /// Enters `Loading` for `input`, dropping the previous outcome.
    pub fn begin(&mut self, input: &str) -> Result<(), SessionError> {
        if input.trim().is_empty() {
            return Err(SessionError::EmptyInput);
        }
        if self.is_loading() {
            return Err(SessionError::Busy);
        }
        self.last_input = Some(input.to_string());
        self.phase = Phase::Loading;
        Ok(())
    }

    /// Stores the outcome of the in-flight attempt.
    pub fn settle(&mut self, outcome: Outcome) {
        if let Err(e) = &outcome {
            tracing::warn!(error = %e, "analysis failed");
        }
        self.phase = Phase::Settled(outcome);
    }

    /// Runs one attempt synchronously through `predictor`; read the result
    /// back with [`report`](Self::report) or [`error`](Self::error).
    pub fn run(&mut self, input: &str, predictor: &dyn Predictor) -> Result<(), SessionError> {
        self.begin(input)?;
        let outcome = analyze(input, predictor);
        self.settle(outcome);
        Ok(())
    }

    /// Re-runs the last input; only allowed once the previous attempt failed.
    pub fn retry(&mut self, predictor: &dyn Predictor) -> Result<(), SessionError> {
        if self.error().is_none() {
            return Err(SessionError::NothingToRetry);
        }
        let input = self.last_input.clone().ok_or(SessionError::NothingToRetry)?;
        self.run(&input, predictor)
    }
}
