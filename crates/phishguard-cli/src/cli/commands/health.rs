//! `phishguard health` – query the prediction API's health endpoint.

use anyhow::{Context, Result};
use phishguard_core::config::PhishguardConfig;
use phishguard_core::predictor::{HttpPredictor, Predictor};

pub async fn run_health(cfg: &PhishguardConfig) -> Result<()> {
    let predictor = HttpPredictor::from_config(cfg);
    let endpoint = predictor.endpoint("health");
    let health = tokio::task::spawn_blocking(move || predictor.health())
        .await
        .context("health task join")?
        .with_context(|| format!("GET {endpoint}"))?;

    println!("Endpoint: {}", cfg.predictor_url);
    println!("Status: {}", health.status);
    println!(
        "Model loaded: {}",
        if health.model_loaded { "yes" } else { "no" }
    );
    if !health.model_loaded {
        anyhow::bail!("prediction API reports no model loaded");
    }
    Ok(())
}
