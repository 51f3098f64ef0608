//! Hostname extraction from a scheme-qualified URL.

use url::Url;

/// Parses `url` and returns its host as serialized by the URL parser.
///
/// Domains come back lowercased and IDNA-encoded, IPv6 hosts keep their
/// brackets, and URLs without a host (e.g. `file:///tmp/x`) yield an empty
/// string. Fails if the URL itself does not parse.
pub fn hostname(url: &str) -> Result<String, url::ParseError> {
    let parsed = Url::parse(url)?;
    Ok(parsed.host_str().unwrap_or_default().to_string())
}
