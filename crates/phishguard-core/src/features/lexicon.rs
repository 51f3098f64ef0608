//! Fixed word lists used by the display heuristics.

/// Substrings that commonly appear in credential-harvesting URLs.
pub const PHISHING_KEYWORDS: &[&str] = &[
    "secure",
    "account",
    "banking",
    "login",
    "signin",
    "verify",
    "update",
    "confirm",
    "hack",
    "bit.ly",
    "suspicious",
];

/// TLDs (with leading dot) that are cheap or free to register and overrepresented in phishing.
pub const SUSPICIOUS_TLDS: &[&str] = &[
    ".tk", ".ml", ".ga", ".cf", ".gq", ".xyz", ".club", ".top", ".work",
];

/// Well-known domains; a hostname containing any of these counts as trusted.
pub const TOP_DOMAINS: &[&str] = &[
    "google.com",
    "facebook.com",
    "amazon.com",
    "wikipedia.org",
    "twitter.com",
    "github.com",
    "linkedin.com",
    "youtube.com",
    "apple.com",
    "microsoft.com",
];

/// Case-insensitive keyword containment over the whole input.
pub fn contains_keyword(input: &str) -> bool {
    let lower = input.to_ascii_lowercase();
    PHISHING_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Checks `"." + last label` of the hostname against [`SUSPICIOUS_TLDS`].
pub fn has_suspicious_tld(hostname: &str) -> bool {
    let last = hostname.rsplit('.').next().unwrap_or_default();
    let tld = format!(".{last}");
    SUSPICIOUS_TLDS.contains(&tld.as_str())
}

/// Substring match against [`TOP_DOMAINS`]; `notgoogle.com` matches too.
pub fn is_top_domain(hostname: &str) -> bool {
    TOP_DOMAINS.iter().any(|d| hostname.contains(d))
}
