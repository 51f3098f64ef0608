//! URL normalization and hostname extraction.
//!
//! User input is accepted with or without a scheme; anything lacking an
//! explicit `<scheme>://` prefix is treated as HTTPS. The normalized string is
//! what gets sent to the predictor and what the hostname is parsed from.

mod host;

use regex::Regex;
use std::sync::LazyLock;

pub use host::hostname;

/// Scheme assumed when the input has none.
pub const DEFAULT_SCHEME_PREFIX: &str = "https://";

static SCHEME_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://").expect("valid scheme regex"));

/// True if `s` starts with `<scheme>://`, where scheme is `[A-Za-z][A-Za-z0-9+.-]*`.
pub fn has_scheme(s: &str) -> bool {
    SCHEME_PREFIX.is_match(s)
}

/// Trims `raw` and prepends `https://` unless it already carries a scheme.
///
/// No other validation is done; malformed hosts surface later when the
/// result is parsed.
///
/// # Examples
///
/// - `normalize_url("example.com")` → `"https://example.com"`
/// - `normalize_url("  http://example.com ")` → `"http://example.com"`
/// - `normalize_url("ftp://files.example.com")` → unchanged
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{trimmed}")
    }
}
