/// Sparse term-weight vector, entries sorted by term id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(u32, f32)>,
}

impl SparseVector {
    /// Entries must already be sorted by term id with no repeats.
    pub(crate) fn from_sorted(entries: Vec<(u32, f32)>) -> Self {
        debug_assert!(entries.windows(2).all(|w| w[0].0 < w[1].0));
        Self { entries }
    }

    pub fn norm(&self) -> f32 {
        self.entries.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt()
    }

    pub fn dot(&self, other: &SparseVector) -> f32 {
        let (mut i, mut j, mut sum) = (0, 0, 0.0);
        while i < self.entries.len() && j < other.entries.len() {
            let (a_term, a_weight) = self.entries[i];
            let (b_term, b_weight) = other.entries[j];
            match a_term.cmp(&b_term) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_weight * b_weight;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Scale to unit length. The zero vector stays zero.
    pub(crate) fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for entry in &mut self.entries {
                entry.1 /= norm;
            }
        }
        self
    }
}
