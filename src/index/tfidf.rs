use std::collections::{BTreeMap, BTreeSet};

use super::tokenizer::is_stop_word;
use super::vector::SparseVector;

/// Fitted vocabulary and inverse document frequencies.
///
/// `idf(t) = ln((1 + n) / (1 + df(t))) + 1`; document and query vectors are
/// raw counts times idf, L2-normalized.
#[derive(Debug, Clone)]
pub struct TfidfModel {
    vocabulary: BTreeMap<String, u32>,
    idf: Vec<f32>,
}

impl TfidfModel {
    /// Fit over tokenized documents. Stop words are dropped here.
    pub fn fit(documents: &[Vec<String>]) -> Self {
        let mut document_frequency: BTreeMap<&str, u32> = BTreeMap::new();
        for terms in documents {
            let distinct: BTreeSet<&str> = terms
                .iter()
                .map(String::as_str)
                .filter(|t| !is_stop_word(t))
                .collect();
            for term in distinct {
                *document_frequency.entry(term).or_default() += 1;
            }
        }

        let n = documents.len() as f32;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (id, (term, df)) in document_frequency.into_iter().enumerate() {
            vocabulary.insert(term.to_string(), id as u32);
            idf.push(((1.0 + n) / (1.0 + df as f32)).ln() + 1.0);
        }

        Self { vocabulary, idf }
    }

    /// Project terms into the fitted space. Unknown terms weigh nothing.
    pub fn transform(&self, terms: &[String]) -> SparseVector {
        let mut counts: BTreeMap<u32, u32> = BTreeMap::new();
        for term in terms {
            if let Some(&id) = self.vocabulary.get(term) {
                *counts.entry(id).or_default() += 1;
            }
        }

        let entries = counts
            .into_iter()
            .map(|(id, count)| (id, count as f32 * self.idf[id as usize]))
            .collect();
        SparseVector::from_sorted(entries).normalized()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }
}
