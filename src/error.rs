//! Error types for url-extractor.
//!
//! Only configuration can fail. Classification never errors: a candidate that
//! does not qualify is simply left out of the output.

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The home URL lacks a scheme or a host.
    #[error("homeUrl must be an absolute URL: {0:?}")]
    InvalidHomeUrl(String),

    /// A `/…/` alternate-domain entry is not a valid regular expression.
    #[error("invalid alternate domain pattern {pattern:?}: {source}")]
    InvalidDomainPattern {
        /// The entry as supplied, delimiters included.
        pattern: String,
        /// The underlying compile error.
        #[source]
        source: regex::Error,
    },
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;
