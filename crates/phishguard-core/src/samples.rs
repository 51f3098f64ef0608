//! Sample URLs offered to first-time users, with the class each is expected to get.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleUrl {
    pub url: &'static str,
    pub expected_safe: bool,
}

pub const SAMPLE_URLS: &[SampleUrl] = &[
    SampleUrl {
        url: "https://google.com",
        expected_safe: true,
    },
    SampleUrl {
        url: "https://paypal-secure-verify.com",
        expected_safe: false,
    },
    SampleUrl {
        url: "https://bank-update-account.net",
        expected_safe: false,
    },
    SampleUrl {
        url: "https://bit.ly/suspicious-link",
        expected_safe: false,
    },
];
