//! Plain-text rendering of reports and failures for terminal output.

use std::fmt::Write;

use super::AnalysisReport;
use crate::features::FeatureSet;

/// Hints shown under every failure.
pub const FAILURE_HINTS: &[&str] = &[
    "Check your internet connection",
    "Verify the URL format is correct",
    "Try again in a few moments",
];

fn yes_no(b: bool) -> &'static str {
    if b {
        "Yes"
    } else {
        "No"
    }
}

/// Full report: verdict, reasons, feature groups, probability breakdown.
pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();
    // Writing to a String never fails.
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, report: &AnalysisReport) -> std::fmt::Result {
    writeln!(out, "{}", report.verdict())?;
    writeln!(out, "Confidence: {}%", report.confidence)?;
    writeln!(out)?;
    writeln!(out, "Analysis Details:")?;
    for reason in &report.reasons {
        writeln!(out, "  • {reason}")?;
    }
    writeln!(out)?;
    out.push_str(&render_features(&report.features));

    let rows = report.probability_rows();
    if !rows.is_empty() {
        writeln!(out)?;
        writeln!(out, "Model Confidence Breakdown")?;
        for row in rows {
            let marker = if row.is_predicted { "*" } else { " " };
            writeln!(
                out,
                "  {marker} {:<12} {:>3}%  {}",
                row.label,
                row.percent,
                bar(row.percent)
            )?;
        }
    }
    Ok(())
}

/// Feature Analysis section on its own (used by the local-only command too).
pub fn render_features(f: &FeatureSet) -> String {
    let mut out = String::new();
    let _ = write_features(&mut out, f);
    out
}

fn write_features(out: &mut String, f: &FeatureSet) -> std::fmt::Result {
    writeln!(out, "Feature Analysis")?;

    writeln!(out, "  Basic URL Features")?;
    row(out, "URL Length", f.url_length)?;
    row(out, "HTTPS", yes_no(f.has_https))?;
    row(out, "Hostname Length", f.hostname_length)?;
    row(out, "Subdomains", f.subdomains)?;

    writeln!(out, "  Character Analysis")?;
    row(out, "Digits", f.num_digits)?;
    row(out, "Special Chars", f.num_special)?;
    row(out, "Dots", f.num_dots)?;
    row(out, "URL Depth", f.url_depth)?;

    writeln!(out, "  Security Indicators")?;
    row(out, "Contains @", yes_no(f.has_at))?;
    row(out, "IP Address", yes_no(f.has_ip))?;
    row(out, "Suspicious Keywords", yes_no(f.has_keywords))?;
    row(out, "Suspicious TLD", yes_no(f.has_suspicious_tld))?;

    writeln!(out, "  Domain Reputation")?;
    if f.is_top_domain {
        row(out, "Trusted Domain", "Recognized as a legitimate website")?;
    } else {
        row(out, "Unknown Domain", "Not in our trusted domain list")?;
    }
    Ok(())
}

fn row(out: &mut String, name: &str, value: impl std::fmt::Display) -> std::fmt::Result {
    writeln!(out, "    {name:<20} {value}")
}

/// 20-cell bar for a percentage.
fn bar(percent: u32) -> String {
    let filled = (percent.min(100) / 5) as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(20 - filled))
}

/// Failure panel with the error message and troubleshooting hints.
pub fn render_failure(message: &str) -> String {
    let mut out = String::from("Analysis Failed\n");
    out.push_str(message);
    out.push('\n');
    for hint in FAILURE_HINTS {
        out.push_str("  • ");
        out.push_str(hint);
        out.push('\n');
    }
    out
}
