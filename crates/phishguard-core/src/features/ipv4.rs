//! IPv4-shaped dotted-quad detection inside a hostname.

use regex::Regex;
use std::sync::LazyLock;

static DOTTED_QUAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{1,3}(\.\d{1,3}){3}\b").expect("valid dotted-quad regex"));

/// True if `host` contains four word-bounded runs of 1-3 digits joined by single dots.
///
/// `10.0.0.1`, `a.10.0.0.1` and `10.0.0.1-cdn.example` match, while
/// `1234.0.0.1` and `10.0.0.1x` do not. Octet values are not range-checked
/// (`999.999.999.999` matches).
pub fn contains_dotted_quad(host: &str) -> bool {
    DOTTED_QUAD.is_match(host)
}
