//! Alternate-domain matching.
//!
//! An alternate domain is a host that should count as local even though it
//! differs from the home URL's host, e.g. a CDN. Entries are either literal
//! hosts or regular expressions written between slashes:
//!
//! ```text
//! static.example.com        literal, exact host equality
//! /.*\.cdn\.example\.com/   pattern, searched anywhere in the host
//! ```
//!
//! Entries are classified once, when the configuration is set.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::error::{Error, Result};
use crate::url_utils::url_host;

/// A single alternate-domain entry.
#[derive(Debug, Clone)]
pub enum DomainMatcher {
    /// Matches a host that is exactly equal to this string.
    Literal(String),
    /// Matches a host this expression finds a match in (unanchored).
    Pattern(Regex),
}

impl DomainMatcher {
    /// Classify an entry. Text wrapped in `/…/` compiles as a pattern.
    pub fn parse(entry: &str) -> Result<Self> {
        let inner = entry
            .strip_prefix('/')
            .and_then(|rest| rest.strip_suffix('/'));

        match inner {
            Some(expr) => Regex::new(expr)
                .map(Self::Pattern)
                .map_err(|source| Error::InvalidDomainPattern {
                    pattern: entry.to_string(),
                    source,
                }),
            None => Ok(Self::Literal(entry.to_string())),
        }
    }

    /// Test a host against this entry.
    #[must_use]
    pub fn matches(&self, host: &str) -> bool {
        match self {
            Self::Literal(domain) => domain == host,
            Self::Pattern(regex) => regex.is_match(host),
        }
    }
}

impl FromStr for DomainMatcher {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for DomainMatcher {
    /// Writes the entry back in its configuration form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(domain) => f.write_str(domain),
            Self::Pattern(regex) => write!(f, "/{}/", regex.as_str()),
        }
    }
}

/// Check if a URL's host matches any alternate-domain entry.
///
/// URLs without a host (relative, malformed) never match.
#[must_use]
pub fn is_alternate_domain_url(url: &str, alternate_domains: &[DomainMatcher]) -> bool {
    let Some(host) = url_host(url) else {
        return false;
    };

    alternate_domains.iter().any(|matcher| matcher.matches(&host))
}
