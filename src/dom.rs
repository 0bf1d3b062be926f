//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate. Parsing is html5ever-based and
//! lenient: malformed markup yields a best-effort tree, never an error.
//! Attribute names come back lower-cased and values entity-decoded.

// Re-export core types for external use
pub use dom_query::Document;

/// An attribute found during the document walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCandidate {
    /// Attribute name (lower-case).
    pub attribute: String,
    /// Attribute value as decoded by the parser.
    pub value: String,
}

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Collect allow-listed attributes from every element, in document order.
///
/// Within an element, attributes keep their source order. `filter` entries
/// are expected lower-case.
#[must_use]
pub fn attribute_nodes(doc: &Document, filter: &[String]) -> Vec<RawCandidate> {
    let mut nodes = Vec::new();

    for element in doc.select("*").nodes() {
        for attr in element.attrs().iter() {
            let name: &str = &attr.name.local;
            if filter.iter().any(|wanted| wanted == name) {
                nodes.push(RawCandidate {
                    attribute: name.to_string(),
                    value: attr.value.to_string(),
                });
            }
        }
    }

    nodes
}
