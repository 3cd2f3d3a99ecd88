pub mod ranking;

use std::cmp::Ordering;

use crate::index::DocumentIndex;
use crate::types::{Query, RetrievedDocument};
pub use ranking::{CosineScorer, Scorer};

pub struct Retriever<S> {
	scorer: S,
}

impl Default for Retriever<CosineScorer> {
	fn default() -> Self {
		Self {
			scorer: CosineScorer,
		}
	}
}

impl<S> Retriever<S>
where
	S: Scorer,
{
	pub fn new(scorer: S) -> Self {
		Self { scorer }
	}

	pub fn retrieve(&self, index: &DocumentIndex, query: &Query, k: usize) -> Vec<RetrievedDocument> {
		// 1. Projection: fitted vocabulary only
		let query_vector = index.model().transform(&query.terms);

		// 2. Scoring Phase
		let mut scored: Vec<(usize, f32)> = index
			.vectors()
			.iter()
			.enumerate()
			.map(|(position, vector)| (position, self.scorer.score(&query_vector, vector)))
			.collect();

		// 3. Ordering Phase
		// Sort globally by (score desc, document order asc)
		scored.sort_by(|a, b| {
			b.1.partial_cmp(&a.1)
				.unwrap_or(Ordering::Equal)
				.then_with(|| a.0.cmp(&b.0))
		});

		debug_assert!(scored
			.windows(2)
			.all(|w| w[0].1 > w[1].1 || (w[0].1 == w[1].1 && w[0].0 < w[1].0)));

		tracing::debug!(
			query = %query.raw,
			k,
			top_score = scored.first().map_or(0.0, |s| s.1),
			"retrieval scored"
		);

		// 4. Truncation
		let documents = index.documents();
		scored
			.into_iter()
			.take(k)
			.map(|(position, score)| {
				let doc = &documents[position];
				RetrievedDocument {
					source: doc.id.as_str().to_string(),
					score,
					text: doc.content.clone(),
				}
			})
			.collect()
	}
}
