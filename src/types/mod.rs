pub mod identifiers;
pub mod retrieval;

pub use identifiers::{DocumentId, DocumentVersion};
pub use retrieval::{Answer, Query, RetrievedDocument};
