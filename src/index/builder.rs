use std::collections::BTreeSet;

use chrono::Utc;
use sha2::{Digest, Sha256};
use thiserror::Error;

use super::tfidf::TfidfModel;
use super::tokenizer::tokenize;
use super::versioning::IndexManifest;
use super::DocumentIndex;
use crate::document::Document;

#[derive(Debug, Error)]
pub enum IndexBuildError {
    #[error("Cannot build an index over an empty corpus")]
    EmptyCorpus,
    #[error("Duplicate document ID: {0}")]
    DuplicateDocumentId(String),
}

/// First phase of the index lifecycle: collects documents, then `build`
/// consumes itself and yields the immutable [`DocumentIndex`].
#[derive(Debug, Default)]
pub struct IndexBuilder {
    documents: Vec<Document>,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, document: Document) -> Self {
        self.documents.push(document);
        self
    }

    pub fn extend(mut self, documents: impl IntoIterator<Item = Document>) -> Self {
        self.documents.extend(documents);
        self
    }

    pub fn build(self) -> Result<DocumentIndex, IndexBuildError> {
        let documents = self.documents;
        if documents.is_empty() {
            return Err(IndexBuildError::EmptyCorpus);
        }

        // Document order is significant: it breaks score ties at query time
        let mut seen = BTreeSet::new();
        for doc in &documents {
            if !seen.insert(doc.id.as_str()) {
                return Err(IndexBuildError::DuplicateDocumentId(doc.id.as_str().to_string()));
            }
        }

        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(&d.content)).collect();
        let model = TfidfModel::fit(&tokenized);
        let vectors = tokenized.iter().map(|terms| model.transform(terms)).collect();

        let mut version_hasher = Sha256::new();
        for doc in &documents {
            let line = format!("{}:{}\n", doc.id.as_str(), doc.version.as_str());
            version_hasher.update(line.as_bytes());
        }
        let index_version = format!("sha256:{}", hex::encode(version_hasher.finalize()));

        let manifest = IndexManifest {
            index_version,
            document_count: documents.len(),
            vocabulary_size: model.vocabulary_size(),
            built_at: Utc::now(),
        };

        tracing::info!(
            documents = manifest.document_count,
            vocabulary = manifest.vocabulary_size,
            version = %manifest.index_version,
            "document index built"
        );

        Ok(DocumentIndex {
            documents,
            vectors,
            model,
            manifest,
        })
    }
}
