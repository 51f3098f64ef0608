//! libcurl-backed predictor client.

use std::time::Duration;

use curl::easy::{Easy, List};
use serde::de::DeserializeOwned;

use super::{HealthStatus, PredictError, PredictRequest, PredictionResponse, Predictor};
use crate::config::PhishguardConfig;

/// Talks to the prediction API at `base_url`.
///
/// Each call performs one blocking transfer on the current thread; call from
/// `spawn_blocking` if used from async code. With no timeout configured a
/// stalled server blocks the caller indefinitely.
#[derive(Debug, Clone)]
pub struct HttpPredictor {
    base_url: String,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl HttpPredictor {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            timeout: None,
            connect_timeout: None,
            user_agent: None,
        }
    }

    pub fn from_config(cfg: &PhishguardConfig) -> Self {
        let mut p = Self::new(&cfg.predictor_url);
        p.timeout = cfg.timeout();
        p.connect_timeout = cfg.connect_timeout();
        p.user_agent = cfg.user_agent.clone();
        p
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `<base>/<path>`; the base never carries a trailing slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn new_handle(&self, url: &str) -> Result<Easy, PredictError> {
        let mut easy = Easy::new();
        easy.url(url)?;
        // 307/308 keep the method and body; 301/302/303 downgrade to GET.
        easy.follow_location(true)?;
        easy.max_redirections(5)?;
        if let Some(t) = self.timeout {
            easy.timeout(t)?;
        }
        if let Some(t) = self.connect_timeout {
            easy.connect_timeout(t)?;
        }
        if let Some(ua) = &self.user_agent {
            easy.useragent(ua)?;
        }
        Ok(easy)
    }

    /// Runs the transfer, collects the body, and maps non-2xx to `Status`.
    fn perform(&self, mut easy: Easy) -> Result<Vec<u8>, PredictError> {
        let mut body = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            tracing::warn!(status = code, "prediction API returned non-success status");
            return Err(PredictError::Status(code));
        }
        Ok(body)
    }

    fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, PredictError> {
        Ok(serde_json::from_slice(body)?)
    }
}

impl Predictor for HttpPredictor {
    fn predict(&self, url: &str) -> Result<PredictionResponse, PredictError> {
        let endpoint = self.endpoint("predict");
        tracing::debug!(%endpoint, %url, "requesting prediction");

        let payload = serde_json::to_vec(&PredictRequest { url })?;

        let mut easy = self.new_handle(&endpoint)?;
        let mut headers = List::new();
        headers.append("Content-Type: application/json")?;
        headers.append("Accept: application/json")?;
        easy.http_headers(headers)?;
        easy.post(true)?;
        easy.post_fields_copy(&payload)?;

        let body = self.perform(easy)?;
        let response: PredictionResponse = Self::decode(&body)?;
        tracing::info!(
            prediction = %response.prediction,
            probability = response.probability,
            "prediction received"
        );
        Ok(response)
    }

    fn health(&self) -> Result<HealthStatus, PredictError> {
        let endpoint = self.endpoint("health");
        tracing::debug!(%endpoint, "checking predictor health");
        let mut easy = self.new_handle(&endpoint)?;
        easy.get(true)?;
        let body = self.perform(easy)?;
        Self::decode(&body)
    }
}
