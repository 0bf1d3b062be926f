//! Charset sniffing for raw HTML bytes.
//!
//! Only the declarations in the first 1024 bytes are honoured:
//! `<meta charset>` first, then `<meta http-equiv="Content-Type">`.
//! Anything undeclared or unknown is read as UTF-8.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

const SNIFF_LEN: usize = 1024;

#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

#[allow(clippy::expect_used)]
static HTTP_EQUIV_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#)
        .expect("valid regex")
});

/// Detect the declared character encoding of an HTML document.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    [&*META_CHARSET_RE, &*HTTP_EQUIV_CHARSET_RE]
        .iter()
        .filter_map(|re| re.captures(&head)?.get(1))
        .find_map(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes into a UTF-8 string.
///
/// Invalid sequences become U+FFFD rather than errors.
///
/// # Examples
///
/// ```
/// use url_extractor::encoding::decode_html;
///
/// let html = b"<meta charset=\"windows-1252\"><a href=\"/caf\xE9\">";
/// assert!(decode_html(html).contains("/café"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _, had_errors) = encoding.decode(html);
    if had_errors {
        tracing::debug!(encoding = encoding.name(), "lossy decode of HTML bytes");
    }
    decoded.into_owned()
}
