use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Describes one built index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexManifest {
    /// sha256 over the ordered `id:version` lines of the corpus.
    pub index_version: String,
    pub document_count: usize,
    pub vocabulary_size: usize,
    pub built_at: DateTime<Utc>, // informational only
}
