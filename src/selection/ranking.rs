use crate::index::SparseVector;

pub trait Scorer {
    fn score(&self, query: &SparseVector, document: &SparseVector) -> f32;
}

/// Cosine similarity. Weights are non-negative, so scores land in [0.0, 1.0];
/// a zero vector on either side scores 0.0.
#[derive(Debug, Default, Clone, Copy)]
pub struct CosineScorer;

impl Scorer for CosineScorer {
    fn score(&self, query: &SparseVector, document: &SparseVector) -> f32 {
        let denominator = query.norm() * document.norm();
        if denominator == 0.0 {
            return 0.0;
        }
        // Rounding can push normalized products a hair past 1.0
        let score = (query.dot(document) / denominator).clamp(0.0, 1.0);
        debug_assert!((0.0..=1.0).contains(&score), "score {score} out of range [0.0, 1.0]");
        score
    }
}
