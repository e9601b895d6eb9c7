//! Cookie header parsing.
//!
//! Review listings beyond the first pages sit behind authentication, so
//! fetching callers typically replay a browser session. These helpers turn
//! a browser-exported `Cookie` header or a Chrome "copy as cURL" command
//! into ordered name/value pairs. The crate itself never fetches.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches the `-b`/`--cookie` flag of a cURL command.
static CURL_COOKIE_FLAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:--cookie|-b)\s+["']?([^"']+)["']?"#).expect("CURL_COOKIE_FLAG regex")
});

/// Matches `-H "..."` header flags of a cURL command.
static CURL_HEADER_FLAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"-H\s+["']([^"']+)["']"#).expect("CURL_HEADER_FLAG regex"));

/// Parse a `name=value; name2=value2` cookie header into pairs.
///
/// Order is preserved, single- or double-quoted values are unquoted, and
/// fragments without `=` are dropped.
#[must_use]
pub fn parse_cookie_header(header: &str) -> Vec<(String, String)> {
    header
        .split(';')
        .filter_map(|fragment| {
            let (name, value) = fragment.split_once('=')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some((name.to_string(), unquote(value.trim()).to_string()))
        })
        .collect()
}

/// Extract cookies from a cURL command copied out of browser devtools.
///
/// Reads both the `-b`/`--cookie` flag and any `-H "Cookie: ..."` headers.
#[must_use]
pub fn parse_curl_command(command: &str) -> Vec<(String, String)> {
    let mut cookies = Vec::new();

    if let Some(raw) = CURL_COOKIE_FLAG
        .captures(command)
        .and_then(|captures| captures.get(1))
    {
        cookies.extend(parse_cookie_header(raw.as_str()));
    }

    for captures in CURL_HEADER_FLAG.captures_iter(command) {
        if let Some(header) = captures.get(1) {
            if let Some(rest) = header.as_str().strip_prefix("Cookie:") {
                cookies.extend(parse_cookie_header(rest));
            }
        }
    }

    cookies
}

/// Format pairs back into a `Cookie` header value.
#[must_use]
pub fn to_cookie_header(cookies: &[(String, String)]) -> String {
    cookies
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("; ")
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(value)
}
