use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A single catalog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub code: String,
    pub title: String,
    pub credits: u32,
    #[serde(rename = "desc")]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Course {
    /// Number of distinct course tags, lower-cased, that appear in `interests`.
    pub fn interest_overlap(&self, interests: &BTreeSet<String>) -> usize {
        let tags: BTreeSet<String> = self.tags.iter().map(|t| t.to_lowercase()).collect();
        tags.intersection(interests).count()
    }
}
