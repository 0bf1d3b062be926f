//! Configuration options for URL extraction.
//!
//! `Options` is the plain-data form of the extractor's configuration. It is
//! validated when handed to [`UrlExtractor::with_options`] or
//! [`UrlExtractor::apply_options`].
//!
//! [`UrlExtractor::with_options`]: crate::UrlExtractor::with_options
//! [`UrlExtractor::apply_options`]: crate::UrlExtractor::apply_options

use serde::{Deserialize, Serialize};

/// Attributes inspected when no filter is configured.
pub const DEFAULT_ATTRIBUTE_FILTER: [&str; 4] = ["src", "href", "content", "poster"];

/// Configuration options for URL extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use url_extractor::Options;
///
/// let options = Options {
///     home_url: Some("https://example.com".to_string()),
///     files_only: true,
///     ..Options::default()
/// };
/// assert_eq!(options.attribute_filter, ["src", "href", "content", "poster"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// The site's home URL, e.g. `https://example.com`.
    ///
    /// When set, only local and alternate-domain URLs are kept, and every
    /// kept URL is resolved against it. Must be absolute.
    ///
    /// Default: `None`
    pub home_url: Option<String>,

    /// Hosts besides the home URL's that count as local.
    ///
    /// Plain strings match exactly; `/regex/` entries are patterns.
    /// Only consulted when `home_url` is set.
    ///
    /// Default: empty
    pub alternate_domains: Vec<String>,

    /// Keep only URLs whose path carries a file extension.
    ///
    /// Default: `false`
    pub files_only: bool,

    /// Extensions to drop, without a leading dot. Case-insensitive.
    ///
    /// Default: empty
    pub ignored_extensions: Vec<String>,

    /// Attribute names to read URLs from. Case-insensitive.
    ///
    /// Default: [`DEFAULT_ATTRIBUTE_FILTER`]
    pub attribute_filter: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            home_url: None,
            alternate_domains: Vec::new(),
            files_only: false,
            ignored_extensions: Vec::new(),
            attribute_filter: DEFAULT_ATTRIBUTE_FILTER
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}
