//! `phishguard samples` – list sample URLs.

use phishguard_core::samples::SAMPLE_URLS;

pub fn run_samples() {
    println!("{:<36} {}", "URL", "EXPECTED");
    for s in SAMPLE_URLS {
        let expected = if s.expected_safe { "safe" } else { "phishing" };
        println!("{:<36} {}", s.url, expected);
    }
}
