//! Result types for extraction output.

use serde::{Deserialize, Serialize};

/// A URL found in an attribute value that passed every configured filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedUrl {
    /// Attribute the value was read from, e.g. `src`.
    pub attribute: String,

    /// The attribute value exactly as it appeared in the document.
    pub value: String,

    /// The value resolved to absolute form. Present only when a home URL
    /// is configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ExtractedUrl {
    /// The resolved URL when there is one, otherwise the raw value.
    #[must_use]
    pub fn absolute(&self) -> &str {
        self.url.as_deref().unwrap_or(&self.value)
    }
}
