use serde::{Deserialize, Serialize};

use crate::index::tokenize;

/// A normalized retrieval query.
///
/// Normalization rules match document indexing:
/// - Lowercase
/// - Tokens are runs of alphanumerics/underscore, at least two chars long
/// - Stop words are NOT removed here; the fitted vocabulary never contains them
#[derive(Debug, Clone)]
pub struct Query {
    pub raw: String,
    pub terms: Vec<String>,
}

impl Query {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let terms = tokenize(&raw);

        Self { raw, terms }
    }
}

/// One retrieval hit, self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedDocument {
    pub source: String,
    pub score: f32,
    pub text: String,
}

/// Final output of a question: the composed answer plus the raw retrieval
/// results it was grounded on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
    pub context: Vec<RetrievedDocument>,
}
