//! The URL extractor: attribute walk, inclusion policy and resolution.

use std::cell::OnceCell;
use std::fmt;

use crate::dom::{self, Document, RawCandidate};
use crate::domain::{is_alternate_domain_url, DomainMatcher};
use crate::encoding;
use crate::error::Result;
use crate::home_url::HomeUrl;
use crate::options::{Options, DEFAULT_ATTRIBUTE_FILTER};
use crate::result::ExtractedUrl;
use crate::url_utils::{extension_of, is_file_url, is_url};

/// Why a candidate value was left out of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// Not a relative, scheme-agnostic or absolute URL.
    NotUrl,
    /// Neither local to the home URL nor on an alternate domain.
    NotLocal,
    /// `files_only` is set and the path has no extension.
    NotFile,
    /// The extension is in the ignore list.
    IgnoredExtension,
}

impl Exclusion {
    /// Short lower-case label, as written to logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotUrl => "not a url",
            Self::NotLocal => "not local",
            Self::NotFile => "not a file",
            Self::IgnoredExtension => "ignored extension",
        }
    }
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads URLs out of HTML attribute values.
///
/// The document is parsed on first use and reused by every later call.
/// Configuration setters take `&mut self` and may be called between
/// extractions; a setter that fails leaves the extractor unchanged.
///
/// # Example
///
/// ```rust
/// use url_extractor::UrlExtractor;
///
/// let html = r#"<img src="/a.png"><a href="http://other.example/x">x</a>"#;
///
/// let mut extractor = UrlExtractor::new(html);
/// extractor.set_home_url("http://home.example")?.set_files_only(true);
///
/// assert_eq!(extractor.absolute_urls(), ["http://home.example/a.png"]);
/// # Ok::<(), url_extractor::Error>(())
/// ```
pub struct UrlExtractor {
    content: String,
    home_url: Option<HomeUrl>,
    alternate_domains: Vec<DomainMatcher>,
    files_only: bool,
    ignored_extensions: Vec<String>,
    attribute_filter: Vec<String>,
    document: OnceCell<Document>,
}

impl UrlExtractor {
    /// Create an extractor over `content` with default settings.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            home_url: None,
            alternate_domains: Vec::new(),
            files_only: false,
            ignored_extensions: Vec::new(),
            attribute_filter: normalize_names(DEFAULT_ATTRIBUTE_FILTER),
            document: OnceCell::new(),
        }
    }

    /// Create an extractor over raw bytes, honouring any declared charset.
    #[must_use]
    pub fn from_bytes(content: &[u8]) -> Self {
        Self::new(encoding::decode_html(content))
    }

    /// Create an extractor and apply `options` in one step.
    pub fn with_options(content: impl Into<String>, options: &Options) -> Result<Self> {
        let mut extractor = Self::new(content);
        extractor.apply_options(options)?;
        Ok(extractor)
    }

    /// Replace the whole configuration.
    ///
    /// Everything is validated before anything is assigned, so an error
    /// leaves the previous configuration in place.
    pub fn apply_options(&mut self, options: &Options) -> Result<&mut Self> {
        let home_url = options
            .home_url
            .as_deref()
            .map(HomeUrl::parse)
            .transpose()?;
        let alternate_domains = parse_domains(&options.alternate_domains)?;

        self.home_url = home_url;
        self.alternate_domains = alternate_domains;
        self.files_only = options.files_only;
        self.ignored_extensions = normalize_extensions(&options.ignored_extensions);
        self.attribute_filter = normalize_names(&options.attribute_filter);

        Ok(self)
    }

    /// The HTML this extractor reads.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Set the site's home URL. It must be absolute; trailing slashes are
    /// dropped.
    pub fn set_home_url(&mut self, home_url: &str) -> Result<&mut Self> {
        self.home_url = Some(HomeUrl::parse(home_url)?);
        Ok(self)
    }

    /// The home URL, without trailing slashes.
    #[must_use]
    pub fn home_url(&self) -> Option<&str> {
        self.home_url.as_ref().map(HomeUrl::as_str)
    }

    /// Set hosts that count as local besides the home URL's own host.
    /// `/regex/` entries compile as patterns.
    pub fn set_alternate_domains<I, S>(&mut self, domains: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.alternate_domains = parse_domains(domains)?;
        Ok(self)
    }

    /// Alternate domains in their configured form, patterns included
    /// with their slashes.
    #[must_use]
    pub fn alternate_domains(&self) -> Vec<String> {
        self.alternate_domains
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Keep only URLs whose path has a file extension.
    pub fn set_files_only(&mut self, files_only: bool) -> &mut Self {
        self.files_only = files_only;
        self
    }

    /// Whether only URLs with a file extension are kept.
    #[must_use]
    pub fn files_only(&self) -> bool {
        self.files_only
    }

    /// Drop URLs with these extensions. Stored lower-cased, without a
    /// leading dot.
    pub fn set_ignored_extensions<I, S>(&mut self, extensions: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ignored_extensions = normalize_extensions(extensions);
        self
    }

    /// Ignored extensions, lower-cased and without a leading dot.
    #[must_use]
    pub fn ignored_extensions(&self) -> &[String] {
        &self.ignored_extensions
    }

    /// Attributes to read URLs from. Stored lower-cased.
    pub fn set_attribute_filter<I, S>(&mut self, attributes: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.attribute_filter = normalize_names(attributes);
        self
    }

    /// Attribute names URLs are read from, lower-cased.
    #[must_use]
    pub fn attribute_filter(&self) -> &[String] {
        &self.attribute_filter
    }

    fn document(&self) -> &Document {
        self.document.get_or_init(|| {
            tracing::debug!(content_len = self.content.len(), "parsing document");
            dom::parse(&self.content)
        })
    }

    /// Every allow-listed attribute value, before any URL filtering.
    #[must_use]
    pub fn candidates(&self) -> Vec<RawCandidate> {
        dom::attribute_nodes(self.document(), &self.attribute_filter)
    }

    /// Decide whether `value` should be left out, and why.
    ///
    /// All four conditions are independent; the first one that fails is
    /// reported.
    #[must_use]
    pub fn exclusion(&self, value: &str) -> Option<Exclusion> {
        if !is_url(value) {
            return Some(Exclusion::NotUrl);
        }

        if let Some(home) = &self.home_url {
            if !home.is_local(value) && !is_alternate_domain_url(value, &self.alternate_domains) {
                return Some(Exclusion::NotLocal);
            }
        }

        if self.files_only && !is_file_url(value) {
            return Some(Exclusion::NotFile);
        }

        if self.ignored_extensions.contains(&extension_of(value)) {
            return Some(Exclusion::IgnoredExtension);
        }

        None
    }

    /// Whether `value` passes every configured filter.
    #[must_use]
    pub fn is_desired_url(&self, value: &str) -> bool {
        self.exclusion(value).is_none()
    }

    /// Resolve `value` against the home URL, if one is configured.
    #[must_use]
    pub fn resolve(&self, value: &str) -> Option<String> {
        self.home_url.as_ref().map(|home| home.resolve(value))
    }

    /// Extract every URL that passes the configured filters, in document
    /// order. Duplicates are kept.
    #[must_use]
    pub fn urls(&self) -> Vec<ExtractedUrl> {
        let candidates = self.candidates();
        let total = candidates.len();

        let urls: Vec<ExtractedUrl> = candidates
            .into_iter()
            .filter(|candidate| match self.exclusion(&candidate.value) {
                Some(reason) => {
                    tracing::trace!(
                        attribute = %candidate.attribute,
                        value = %candidate.value,
                        %reason,
                        "excluded candidate"
                    );
                    false
                }
                None => true,
            })
            .map(|candidate| ExtractedUrl {
                url: self.resolve(&candidate.value),
                attribute: candidate.attribute,
                value: candidate.value,
            })
            .collect();

        tracing::debug!(candidates = total, kept = urls.len(), "extracted urls");
        urls
    }

    /// Like [`urls`](Self::urls), but only the URL strings: resolved when a
    /// home URL is configured, raw otherwise.
    #[must_use]
    pub fn absolute_urls(&self) -> Vec<String> {
        self.urls()
            .iter()
            .map(|item| item.absolute().to_string())
            .collect()
    }
}

impl fmt::Debug for UrlExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlExtractor")
            .field("content_len", &self.content.len())
            .field("home_url", &self.home_url())
            .field("alternate_domains", &self.alternate_domains)
            .field("files_only", &self.files_only)
            .field("ignored_extensions", &self.ignored_extensions)
            .field("attribute_filter", &self.attribute_filter)
            .field("parsed", &self.document.get().is_some())
            .finish()
    }
}

fn parse_domains<I, S>(domains: I) -> Result<Vec<DomainMatcher>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    domains
        .into_iter()
        .map(|domain| DomainMatcher::parse(domain.as_ref()))
        .collect()
}

fn normalize_extensions<I, S>(extensions: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    extensions
        .into_iter()
        .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase())
        .collect()
}

fn normalize_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| name.as_ref().to_ascii_lowercase())
        .collect()
}
