pub mod document;

pub use crate::types::identifiers::{DocumentId, DocumentVersion};
pub use document::Document;

use crate::catalog::Catalog;

/// Default source name of the program-rules document.
pub const RULES_SOURCE: &str = "program_rules.md";

/// The full retrieval corpus: rules first, then one document per course in
/// catalog order.
pub fn corpus(rules_source: &str, rules_text: &str, catalog: &Catalog) -> Vec<Document> {
    std::iter::once(Document::from_rules(rules_source, rules_text))
        .chain(catalog.iter().map(Document::from_course))
        .collect()
}
