//! Lexical URL features recomputed locally for display.
//!
//! These are independent of whatever features the prediction service uses:
//! they are derived from the input string alone, never sent to the backend,
//! and may disagree with what actually drove the verdict.

mod ipv4;
pub mod lexicon;

use serde::{Deserialize, Serialize};

use crate::url_model;

pub use ipv4::contains_dotted_quad;

/// Display features for one URL. Field names serialize in camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSet {
    /// Characters in the raw input.
    pub url_length: usize,
    /// Raw input starts with `https`.
    pub has_https: bool,
    /// Hostname labels beyond the registrable two, floored at 0.
    pub subdomains: usize,
    pub num_digits: usize,
    /// Characters outside `[A-Za-z0-9]`.
    pub num_special: usize,
    pub num_dots: usize,
    pub has_at: bool,
    #[serde(rename = "hasIP")]
    pub has_ip: bool,
    /// `/` count minus the two of `://`; negative for bare hosts.
    pub url_depth: i64,
    pub has_keywords: bool,
    #[serde(rename = "hasSuspiciousTLD")]
    pub has_suspicious_tld: bool,
    pub is_top_domain: bool,
    pub hostname_length: usize,
}

/// Computes the display features for `raw`.
///
/// Character counts run over `raw` exactly as given; hostname rules use the
/// host of [`url_model::normalize_url`]`(raw)`. Fails without producing a
/// partial result if the normalized URL does not parse.
pub fn extract_features(raw: &str) -> Result<FeatureSet, url::ParseError> {
    let normalized = url_model::normalize_url(raw);
    let host = url_model::hostname(&normalized)?;

    let label_count = host.split('.').count();
    let slash_count = count_chars(raw, |c| c == '/') as i64;

    Ok(FeatureSet {
        url_length: raw.chars().count(),
        has_https: raw.starts_with("https"),
        subdomains: label_count.saturating_sub(2),
        num_digits: count_chars(raw, |c| c.is_ascii_digit()),
        num_special: count_chars(raw, |c| !c.is_ascii_alphanumeric()),
        num_dots: count_chars(raw, |c| c == '.'),
        has_at: raw.contains('@'),
        has_ip: contains_dotted_quad(&host),
        url_depth: slash_count - 2,
        has_keywords: lexicon::contains_keyword(raw),
        has_suspicious_tld: lexicon::has_suspicious_tld(&host),
        is_top_domain: lexicon::is_top_domain(&host),
        hostname_length: host.chars().count(),
    })
}

fn count_chars(s: &str, pred: impl Fn(char) -> bool) -> usize {
    s.chars().filter(|&c| pred(c)).count()
}
