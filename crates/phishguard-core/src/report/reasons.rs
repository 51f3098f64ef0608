//! Human-readable reason lines.

use crate::features::FeatureSet;

/// Summary line for the verdict, chosen by confidence tier.
///
/// The low tier of a safe verdict reads "Low confidence classification"
/// rather than mentioning "safe".
pub fn confidence_summary(is_phishing: bool, confidence: u32) -> &'static str {
    match (is_phishing, confidence) {
        (true, c) if c > 80 => "High confidence phishing detection",
        (true, c) if c > 60 => "Moderate confidence phishing detection",
        (true, _) => "Low confidence phishing detection",
        (false, c) if c > 80 => "High confidence safe classification",
        (false, c) if c > 60 => "Moderate confidence safe classification",
        (false, _) => "Low confidence classification",
    }
}

/// Per-feature lines in display order.
///
/// The first five rules always contribute one line (positive or negative
/// wording); the rest only appear when their condition holds.
pub fn feature_details(f: &FeatureSet) -> Vec<String> {
    let mut details = Vec::with_capacity(10);

    details.push(if f.has_https {
        "Secure HTTPS detected".to_string()
    } else {
        "No HTTPS (potentially unsafe)".to_string()
    });

    details.push(if f.subdomains > 2 {
        format!("Suspicious: {} subdomains", f.subdomains)
    } else {
        "No suspicious subdomains".to_string()
    });

    details.push(if f.url_length > 75 {
        format!("Long URL length: {} characters", f.url_length)
    } else {
        "URL length appears normal".to_string()
    });

    details.push(if f.has_suspicious_tld {
        "Suspicious top-level domain (TLD)".to_string()
    } else {
        "TLD is common/benign".to_string()
    });

    details.push(if f.has_keywords {
        "Contains phishing-related keywords".to_string()
    } else {
        "No phishing keywords detected".to_string()
    });

    if f.has_at {
        details.push("Contains @ symbol (suspicious)".to_string());
    }
    if f.has_ip {
        details.push("Uses IP address instead of domain name".to_string());
    }
    if f.num_digits > 5 {
        details.push(format!("High number of digits: {}", f.num_digits));
    }
    if f.num_special > 10 {
        details.push(format!("Many special characters: {}", f.num_special));
    }
    if f.is_top_domain {
        details.push("Recognized as trusted domain".to_string());
    }

    details
}
