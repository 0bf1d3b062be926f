//! The validated home URL: resolution base and locality reference.

use std::fmt;

use url::Url;

use crate::error::{Error, Result};
use crate::url_utils::{
    is_local_url, is_relative_url, is_scheme_agnostic_url, parse_absolute, url_host,
};

/// An absolute base address, stored without trailing slashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeUrl {
    base: String,
    host: String,
    parsed: Url,
}

impl HomeUrl {
    /// Validate and normalize a home URL.
    ///
    /// Fails with [`Error::InvalidHomeUrl`] unless the string has both a
    /// scheme and a host.
    ///
    /// # Examples
    /// ```
    /// use url_extractor::HomeUrl;
    ///
    /// let home = HomeUrl::parse("https://example.com/")?;
    /// assert_eq!(home.as_str(), "https://example.com");
    /// assert!(HomeUrl::parse("www.example.com").is_err());
    /// # Ok::<(), url_extractor::Error>(())
    /// ```
    pub fn parse(home_url: &str) -> Result<Self> {
        let parsed =
            parse_absolute(home_url).ok_or_else(|| Error::InvalidHomeUrl(home_url.to_string()))?;

        Ok(Self {
            base: home_url.trim_end_matches('/').to_string(),
            host: url_host(home_url).unwrap_or_default(),
            parsed,
        })
    }

    /// The home URL as configured, minus trailing slashes.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.base
    }

    /// Scheme, e.g. `https`.
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.parsed.scheme()
    }

    /// Host as written, e.g. `www.Example.com`.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Whether `url` belongs to this site. See [`is_local_url`].
    #[must_use]
    pub fn is_local(&self, url: &str) -> bool {
        is_local_url(url, &self.base)
    }

    /// Rewrite `url` into absolute form against this home URL.
    ///
    /// - `//host/path` takes this URL's scheme.
    /// - `/path` is appended to this URL verbatim.
    /// - Anything else is returned unchanged.
    ///
    /// # Examples
    /// ```
    /// use url_extractor::HomeUrl;
    ///
    /// let home = HomeUrl::parse("http://home.example")?;
    /// assert_eq!(home.resolve("//cdn.example/y.js"), "http://cdn.example/y.js");
    /// assert_eq!(home.resolve("/a.png"), "http://home.example/a.png");
    /// assert_eq!(home.resolve("https://other.example/"), "https://other.example/");
    /// # Ok::<(), url_extractor::Error>(())
    /// ```
    #[must_use]
    pub fn resolve(&self, url: &str) -> String {
        if is_scheme_agnostic_url(url) {
            return format!("{}:{url}", self.scheme());
        }

        if is_relative_url(url) {
            return format!("{}{url}", self.base);
        }

        url.to_string()
    }
}

impl fmt::Display for HomeUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home(s: &str) -> HomeUrl {
        HomeUrl::parse(s).unwrap_or_else(|e| panic!("{e}"))
    }

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        assert_eq!(home("http://home.example/").as_str(), "http://home.example");
        assert_eq!(home("http://home.example///").as_str(), "http://home.example");
        assert_eq!(home("http://home.example/blog/").as_str(), "http://home.example/blog");
    }

    #[test]
    fn test_rejects_urls_without_scheme() {
        assert!(matches!(
            HomeUrl::parse("www.bad-url.com"),
            Err(Error::InvalidHomeUrl(ref s)) if s == "www.bad-url.com"
        ));
        assert!(HomeUrl::parse("/relative").is_err());
        assert!(HomeUrl::parse("//cdn.example.com").is_err());
        assert!(HomeUrl::parse("").is_err());
    }

    #[test]
    fn test_components() {
        let h = home("https://www.home.example:8443/");
        assert_eq!(h.scheme(), "https");
        assert_eq!(h.host(), "www.home.example");
    }

    #[test]
    fn test_host_keeps_case() {
        let h = home("https://WWW.Home.Example/");
        assert_eq!(h.host(), "WWW.Home.Example");
        assert!(!h.is_local("https://home.example/a"));
        assert!(h.is_local("https://WWW.Home.Example/a"));
    }

    #[test]
    fn test_resolve_scheme_agnostic() {
        assert_eq!(home("http://home.example").resolve("//host/path"), "http://host/path");
        assert_eq!(home("https://home.example").resolve("//host/path"), "https://host/path");
    }

    #[test]
    fn test_resolve_relative_appends_to_base() {
        let h = home("https://home.example/sub/");
        assert_eq!(h.resolve("/a.png"), "https://home.example/sub/a.png");
    }

    #[test]
    fn test_resolve_absolute_is_identity() {
        let h = home("http://home.example");
        let url = "https://home.example/x?y=1#z";
        assert_eq!(h.resolve(url), url);
        assert_eq!(h.resolve(&h.resolve(url)), url);
    }

    #[test]
    fn test_is_local() {
        let h = home("https://www.home.example");
        assert!(h.is_local("/x"));
        assert!(h.is_local("https://home.example/x"));
        assert!(!h.is_local("https://elsewhere.example/x"));
    }
}
