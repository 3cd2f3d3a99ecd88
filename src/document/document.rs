use serde::{Deserialize, Serialize};

use crate::catalog::Course;
use crate::types::identifiers::{DocumentId, DocumentVersion};

/// The atomic unit of retrieval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub version: DocumentVersion,
    pub content: String,
}

impl Document {
    /// Version is computed from the content at construction and never changes.
    pub fn new(id: DocumentId, content: String) -> Self {
        let version = DocumentVersion::from_content(content.as_bytes());

        Document {
            id,
            version,
            content,
        }
    }

    /// The program rules, retrievable as one document named by its source file.
    pub fn from_rules(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(DocumentId::new(source), text.into())
    }

    /// Synthesized per-course summary. The first line is the headline used
    /// by extractive answers.
    pub fn from_course(course: &Course) -> Self {
        let content = format!(
            "{} — {} ({} cr)\n{}\nTags: {}",
            course.code,
            course.title,
            course.credits,
            course.description,
            course.tags.join(", "),
        );
        Self::new(DocumentId::new(course.code.clone()), content)
    }

    /// First line of the content, without the line terminator.
    pub fn headline(&self) -> &str {
        first_line(&self.content)
    }
}

pub(crate) fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or_default()
}
