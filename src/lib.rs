//! Deterministic degree audit, course suggestion and program-document
//! retrieval.
//!
//! `degree-advisor` classifies completed coursework against configured
//! requirement buckets, ranks next courses by requirement status and
//! interest overlap, and answers free-text questions from a static TF-IDF
//! index over the program rules and course catalog. Identical inputs always
//! produce identical outputs.

pub mod advisor;
pub mod answer;
pub mod audit;
pub mod catalog;
pub mod config;
pub mod document;
pub mod index;
pub mod selection;
pub mod types;

pub use advisor::{parse_interests, AdviceRequest, AdviceResponse, Advisor, AdvisorError};
