//! # url-extractor
//!
//! Extracts URLs from HTML attribute values (`src`, `href`, `content`,
//! `poster`, ...), classifies them as local or remote, page or file, and
//! resolves relative references against a known home URL.
//!
//! Typical uses are crawling, asset auditing and sitemap generation: the
//! caller supplies raw markup and a few policies, and gets back the URLs that
//! belong to the site.
//!
//! ## Quick Start
//!
//! ```rust
//! use url_extractor::{extract_urls, Options};
//!
//! let html = r#"<img src="/a.png">
//! <a href="http://other.example/x">elsewhere</a>
//! <script src="//cdn.example/y.js"></script>"#;
//!
//! let options = Options {
//!     home_url: Some("http://home.example".to_string()),
//!     ..Options::default()
//! };
//!
//! let urls = extract_urls(html, &options)?;
//! assert_eq!(urls.len(), 1);
//! assert_eq!(urls[0].value, "/a.png");
//! assert_eq!(urls[0].url.as_deref(), Some("http://home.example/a.png"));
//! # Ok::<(), url_extractor::Error>(())
//! ```
//!
//! ## Policies
//!
//! A candidate is kept only if all of these hold:
//!
//! - it is a relative (`/path`), scheme-agnostic (`//host/path`) or absolute
//!   (`scheme://host/...`) URL;
//! - with a home URL set, it is local (relative, or same host ignoring a
//!   leading `www.`) or its host matches an alternate domain;
//! - with `files_only` set, its path has an extension;
//! - its extension is not ignored.
//!
//! Classification never errors. Only configuration can fail: a home URL
//! without scheme and host, or an alternate-domain pattern that doesn't
//! compile.

mod error;
mod extractor;
mod home_url;
mod options;
mod result;

/// DOM adapter: parsing and the attribute walk.
pub mod dom;

/// Alternate-domain entries (literal hosts and `/regex/` patterns).
pub mod domain;

/// Character encoding detection and transcoding.
pub mod encoding;

/// URL predicates: syntax, locality, file extensions.
pub mod url_utils;

// Public API - re-exports
pub use domain::DomainMatcher;
pub use error::{Error, Result};
pub use extractor::{Exclusion, UrlExtractor};
pub use home_url::HomeUrl;
pub use options::{Options, DEFAULT_ATTRIBUTE_FILTER};
pub use result::ExtractedUrl;

/// Extracts URLs from an HTML document with the given options.
///
/// Fails only if `options` is invalid (see [`Error`]).
///
/// # Example
///
/// ```rust
/// use url_extractor::{extract_urls, Options};
///
/// let html = r#"<a href="/docs/guide.pdf">Guide</a><a href="/about">About</a>"#;
/// let options = Options { files_only: true, ..Options::default() };
///
/// let urls = extract_urls(html, &options)?;
/// assert_eq!(urls.len(), 1);
/// assert_eq!(urls[0].attribute, "href");
/// # Ok::<(), url_extractor::Error>(())
/// ```
pub fn extract_urls(html: &str, options: &Options) -> Result<Vec<ExtractedUrl>> {
    Ok(UrlExtractor::with_options(html, options)?.urls())
}

/// Extracts URLs from HTML bytes, detecting the character encoding from
/// `<meta>` declarations first.
///
/// # Example
///
/// ```rust
/// use url_extractor::{extract_urls_from_bytes, Options};
///
/// let html = b"<meta charset=\"ISO-8859-1\"><img src=\"/caf\xE9.png\">";
/// let urls = extract_urls_from_bytes(html, &Options::default())?;
/// assert_eq!(urls[0].value, "/café.png");
/// # Ok::<(), url_extractor::Error>(())
/// ```
pub fn extract_urls_from_bytes(html: &[u8], options: &Options) -> Result<Vec<ExtractedUrl>> {
    extract_urls(&encoding::decode_html(html), options)
}
