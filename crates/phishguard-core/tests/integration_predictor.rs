//! Integration tests: libcurl predictor client against a local stand-in API.

mod common;

use common::predict_server::{self, CannedResponse};
use phishguard_core::predictor::{HttpPredictor, PredictError, Predictor};
use phishguard_core::session::{analyze, AnalysisError, AnalysisSession};

const BAD_BODY: &str =
    r#"{"prediction":"bad","probability":0.92,"probabilities":{"bad":0.92,"good":0.08}}"#;

#[test]
fn predict_posts_json_and_decodes_response() {
    let server = predict_server::start(CannedResponse::ok(BAD_BODY));
    let client = HttpPredictor::new(&format!("{}/", server.base_url));

    let response = client.predict("https://paypal-secure-verify.com").unwrap();
    assert_eq!(response.prediction, "bad");
    assert!((response.probability - 0.92).abs() < 1e-9);
    assert_eq!(response.probabilities.len(), 2);

    let seen = server.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].method, "POST");
    assert_eq!(seen[0].path, "/predict");
    assert_eq!(seen[0].content_type.as_deref(), Some("application/json"));
    let body: serde_json::Value = serde_json::from_str(&seen[0].body).unwrap();
    assert_eq!(body, serde_json::json!({"url": "https://paypal-secure-verify.com"}));
}

#[test]
fn temporary_redirect_is_followed_with_body() {
    let target = predict_server::start(CannedResponse::ok(BAD_BODY));
    let redirector =
        predict_server::start(CannedResponse::redirect(&format!("{}/predict", target.base_url)));
    let client = HttpPredictor::new(&redirector.base_url);

    let response = client.predict("https://example.com").unwrap();
    assert_eq!(response.prediction, "bad");

    assert_eq!(redirector.seen.lock().unwrap().len(), 1);
    let seen = target.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].method, "POST");
    assert_eq!(seen[0].path, "/predict");
    assert!(seen[0].body.contains("https://example.com"));
}

#[test]
fn non_success_status_is_reported_with_code() {
    let server = predict_server::start(CannedResponse::status("500 Internal Server Error"));
    let client = HttpPredictor::new(&server.base_url);

    let err = client.predict("https://example.com").unwrap_err();
    assert!(matches!(err, PredictError::Status(500)));
    assert!(err.to_string().contains("500"));
}

#[test]
fn malformed_body_is_a_decode_error() {
    let server = predict_server::start(CannedResponse::ok("<html>not json</html>"));
    let client = HttpPredictor::new(&server.base_url);

    let err = client.predict("https://example.com").unwrap_err();
    assert!(matches!(err, PredictError::Decode(_)));
}

#[test]
fn connection_refused_is_a_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let port = {
        let l = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        l.local_addr().unwrap().port()
    };
    let client = HttpPredictor::new(&format!("http://127.0.0.1:{port}"));
    let err = client.predict("https://example.com").unwrap_err();
    assert!(matches!(err, PredictError::Transport(_)));
}

#[test]
fn health_endpoint_decodes() {
    let server =
        predict_server::start(CannedResponse::ok(r#"{"status":"healthy","model_loaded":true}"#));
    let client = HttpPredictor::new(&server.base_url);

    let health = client.health().unwrap();
    assert_eq!(health.status, "healthy");
    assert!(health.model_loaded);

    let seen = server.seen.lock().unwrap();
    assert_eq!(seen[0].method, "GET");
    assert_eq!(seen[0].path, "/health");
}

#[test]
fn full_analysis_over_http() {
    let server = predict_server::start(CannedResponse::ok(BAD_BODY));
    let client = HttpPredictor::new(&server.base_url);

    let report = analyze("paypal-secure-verify.com", &client).unwrap();
    assert!(report.is_phishing);
    assert_eq!(report.confidence, 92);
    assert_eq!(report.reasons[0], "High confidence phishing detection");
    // Bare input: the request was upgraded, the display feature was not.
    assert!(!report.features.has_https);

    let seen = server.seen.lock().unwrap();
    assert!(seen[0].body.contains("https://paypal-secure-verify.com"));
}

#[test]
fn session_failure_then_retry_against_server() {
    let failing = predict_server::start(CannedResponse::status("503 Service Unavailable"));
    let mut session = AnalysisSession::new();
    session
        .run("https://example.com", &HttpPredictor::new(&failing.base_url))
        .unwrap();
    assert!(matches!(
        session.error(),
        Some(AnalysisError::Prediction(PredictError::Status(503)))
    ));

    let healthy = predict_server::start(CannedResponse::ok(
        r#"{"prediction":"good","probability":0.97,"probabilities":{"bad":0.03,"good":0.97}}"#,
    ));
    session.retry(&HttpPredictor::new(&healthy.base_url)).unwrap();
    let report = session.report().expect("report after retry");
    assert!(!report.is_phishing);
    assert_eq!(report.reasons[0], "High confidence safe classification");
}
