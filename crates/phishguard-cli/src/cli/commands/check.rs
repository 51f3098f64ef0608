//! `phishguard check <url>...` – analyze URLs with the prediction API.

use anyhow::{Context, Result};
use phishguard_core::config::PhishguardConfig;
use phishguard_core::predictor::HttpPredictor;
use phishguard_core::report::render::{render_failure, render_report};
use phishguard_core::report::AnalysisReport;
use phishguard_core::session::{analyze, AnalysisError, AnalysisSession};

/// JSON line for a successful attempt.
pub(crate) fn success_json(url: &str, report: &AnalysisReport) -> serde_json::Value {
    serde_json::json!({ "url": url, "report": report })
}

/// JSON line for a failed attempt.
pub(crate) fn failure_json(url: &str, err: &AnalysisError) -> serde_json::Value {
    let status = match err {
        AnalysisError::Prediction(e) => e.status(),
        AnalysisError::InvalidUrl(_) => None,
    };
    serde_json::json!({ "url": url, "error": err.to_string(), "status": status })
}

/// Analyzes each URL in turn, one request in flight at a time.
pub async fn run_check(cfg: &PhishguardConfig, urls: &[String], json: bool) -> Result<()> {
    let predictor = HttpPredictor::from_config(cfg);
    let mut session = AnalysisSession::new();
    let mut failures = 0usize;

    for (i, url) in urls.iter().enumerate() {
        if let Err(e) = session.begin(url) {
            eprintln!("skipping {url:?}: {e}");
            failures += 1;
            continue;
        }

        let outcome = tokio::task::spawn_blocking({
            let url = url.clone();
            let predictor = predictor.clone();
            move || analyze(&url, &predictor)
        })
        .await
        .context("analysis task join")?;
        session.settle(outcome);

        if !json && i > 0 {
            println!();
        }
        if let Some(report) = session.report() {
            if json {
                println!("{}", success_json(url, report));
            } else {
                println!("URL: {}", url.trim());
                print!("{}", render_report(report));
            }
        } else if let Some(err) = session.error() {
            failures += 1;
            if json {
                println!("{}", failure_json(url, err));
            } else {
                println!("URL: {}", url.trim());
                print!("{}", render_failure(&err.to_string()));
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} analyses failed", failures, urls.len());
    }
    Ok(())
}
