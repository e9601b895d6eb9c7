//! Character encoding detection and transcoding.
//!
//! The review site serves UTF-8 today, but archived pages and mirrors of
//! Chinese-language content regularly arrive as GB2312/GBK/GB18030. Pages
//! declare their charset in meta tags; this module detects it and decodes
//! to UTF-8 before parsing, replacing invalid sequences rather than
//! failing.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">`.
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">`.
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// Detect the character encoding declared by an HTML document.
///
/// Checks `<meta charset>` first, then the `http-equiv` form, and falls
/// back to UTF-8. Only the first 1024 bytes are examined, which is where
/// conforming documents place the declaration.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    for pattern in [&CHARSET_META_RE, &CONTENT_TYPE_CHARSET_RE] {
        if let Some(label) = pattern
            .captures(&head_str)
            .and_then(|captures| captures.get(1))
        {
            if let Some(encoding) = Encoding::for_label(label.as_str().as_bytes()) {
                return encoding;
            }
        }
    }

    UTF_8
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Invalid sequences become the Unicode replacement character instead of
/// an error; a blocked or truncated response should still triage and
/// extract as far as it goes.
///
/// # Examples
///
/// ```
/// use douban_reviews::encoding::transcode_to_utf8;
///
/// let html = b"<html><body>plain ascii</body></html>";
/// assert!(transcode_to_utf8(html).contains("plain ascii"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_utf8() {
        assert_eq!(detect_encoding(b"<html><body>Test</body></html>"), UTF_8);
    }

    #[test]
    fn detects_gb2312_label() {
        let html = br#"<html><head><meta charset="gb2312"></head></html>"#;
        // encoding_rs maps the whole GB family to GBK/GB18030 decoders
        assert_eq!(detect_encoding(html).name(), "GBK");
    }

    #[test]
    fn detects_charset_from_http_equiv() {
        let html =
            br#"<meta http-equiv="Content-Type" content="text/html; charset=gb18030">"#;
        assert_eq!(detect_encoding(html).name(), "gb18030");
    }

    #[test]
    fn detection_is_case_insensitive_and_quote_agnostic() {
        assert_eq!(detect_encoding(b"<META CHARSET=UTF-8>"), UTF_8);
        assert_eq!(detect_encoding(br#"<meta charset='gbk'>"#).name(), "GBK");
    }

    #[test]
    fn unknown_label_falls_back_to_utf8() {
        let html = br#"<meta charset="not-a-charset">"#;
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn transcodes_gb2312_chinese() {
        // GB2312 bytes 0xD6 0xD0 encode the character 中
        let html = b"<html><head><meta charset=\"gb2312\"></head><body>\xD6\xD0</body></html>";
        assert!(transcode_to_utf8(html).contains('\u{4E2D}'));
    }

    #[test]
    fn utf8_passthrough_is_lossless() {
        let html = "<html><body>蓝风筝 (展开)</body></html>";
        assert_eq!(transcode_to_utf8(html.as_bytes()), html);
    }

    #[test]
    fn invalid_bytes_become_replacement_chars() {
        let html = b"<html><body>ok \xFF\xFE still ok</body></html>";
        let decoded = transcode_to_utf8(html);
        assert!(decoded.contains("ok"));
        assert!(decoded.contains("still ok"));
    }
}
