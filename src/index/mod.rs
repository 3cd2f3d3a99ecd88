//! Static TF-IDF index over the program rules and course summaries.
//!
//! Built once through [`IndexBuilder`]; afterwards the [`DocumentIndex`] has
//! no mutating methods and can be shared freely across threads.

pub mod builder;
pub mod tfidf;
pub mod tokenizer;
pub mod vector;
pub mod versioning;

pub use builder::{IndexBuildError, IndexBuilder};
pub use tfidf::TfidfModel;
pub use tokenizer::{is_stop_word, tokenize, STOP_WORDS};
pub use vector::SparseVector;
pub use versioning::IndexManifest;

use crate::catalog::Catalog;
use crate::document::{self, Document};
use crate::selection::Retriever;
use crate::types::{Query, RetrievedDocument};

#[derive(Debug)]
pub struct DocumentIndex {
    documents: Vec<Document>,
    vectors: Vec<SparseVector>,
    model: TfidfModel,
    manifest: IndexManifest,
}

impl DocumentIndex {
    /// Rules document first, then one synthesized document per course.
    pub fn from_catalog(
        rules_source: &str,
        rules_text: &str,
        catalog: &Catalog,
    ) -> Result<Self, IndexBuildError> {
        IndexBuilder::new()
            .extend(document::corpus(rules_source, rules_text, catalog))
            .build()
    }

    /// Top `k` documents by cosine similarity to `query`.
    pub fn retrieve(&self, query: &str, k: usize) -> Vec<RetrievedDocument> {
        Retriever::default().retrieve(self, &Query::new(query), k)
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn vectors(&self) -> &[SparseVector] {
        &self.vectors
    }

    pub fn model(&self) -> &TfidfModel {
        &self.model
    }

    pub fn manifest(&self) -> &IndexManifest {
        &self.manifest
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
