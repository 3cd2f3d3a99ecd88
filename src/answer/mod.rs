//! Turns retrieved documents into a user-facing answer.
//!
//! Two composers share one interface: a local extractive one and one that
//! delegates to an external text generator, falling back to extraction
//! whenever the generator fails.

pub mod generation;

use std::sync::Arc;

use crate::config::GenerationConfig;
use crate::document::document::first_line;
use crate::index::DocumentIndex;
use crate::types::{Answer, RetrievedDocument};

pub use generation::{GenerationError, TextGenerator};

/// Separator placed between context documents in a generation prompt.
pub const CONTEXT_DELIMITER: &str = "\n\n---\n\n";

pub const FALLBACK_NOTE: &str =
    "(Enable text generation in the program configuration for polished answers.)";

pub trait AnswerComposer {
    fn compose(&self, query: &str, context: &[RetrievedDocument]) -> String;
}

/// One bullet per retrieved document holding its first line, then the
/// trailer note.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExtractiveComposer;

impl AnswerComposer for ExtractiveComposer {
    fn compose(&self, _query: &str, context: &[RetrievedDocument]) -> String {
        let bullets: Vec<String> = context
            .iter()
            .map(|doc| format!("- {}", first_line(&doc.text)))
            .collect();
        format!("{}\n\n{}", bullets.join("\n"), FALLBACK_NOTE)
    }
}

pub struct DelegatingComposer<G> {
    generator: G,
    fallback: ExtractiveComposer,
}

impl<G: TextGenerator> DelegatingComposer<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            fallback: ExtractiveComposer,
        }
    }
}

impl<G: TextGenerator> AnswerComposer for DelegatingComposer<G> {
    fn compose(&self, query: &str, context: &[RetrievedDocument]) -> String {
        let prompt = grounding_prompt(query, context);
        match self.generator.generate(&prompt) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(error = %err, "text generation failed; using extractive answer");
                self.fallback.compose(query, context)
            }
        }
    }
}

pub fn grounding_prompt(query: &str, context: &[RetrievedDocument]) -> String {
    let joined: Vec<&str> = context.iter().map(|doc| doc.text.as_str()).collect();
    format!(
        "You are an academic advisor. Answer clearly using ONLY the info in the context.\n\n\
         Context:\n{}\n\nQuestion: {}\n\nAnswer:",
        joined.join(CONTEXT_DELIMITER),
        query,
    )
}

/// Composer chosen once from configuration.
pub enum ConfiguredComposer {
    Extractive(ExtractiveComposer),
    Delegating(DelegatingComposer<Arc<dyn TextGenerator>>),
}

impl ConfiguredComposer {
    /// Delegates only when generation is enabled, a credential is present
    /// and a generator was supplied.
    pub fn from_config(config: &GenerationConfig, generator: Option<Arc<dyn TextGenerator>>) -> Self {
        match generator {
            Some(generator) if config.delegation_active() => {
                ConfiguredComposer::Delegating(DelegatingComposer::new(generator))
            }
            _ => ConfiguredComposer::Extractive(ExtractiveComposer),
        }
    }

    pub fn is_delegating(&self) -> bool {
        matches!(self, ConfiguredComposer::Delegating(_))
    }
}

impl AnswerComposer for ConfiguredComposer {
    fn compose(&self, query: &str, context: &[RetrievedDocument]) -> String {
        match self {
            ConfiguredComposer::Extractive(composer) => composer.compose(query, context),
            ConfiguredComposer::Delegating(composer) => composer.compose(query, context),
        }
    }
}

/// Retrieval plus composition over a shared, immutable index.
pub struct QuestionAnswerer<C> {
    index: Arc<DocumentIndex>,
    composer: C,
    k: usize,
}

impl<C: AnswerComposer> QuestionAnswerer<C> {
    pub fn new(index: Arc<DocumentIndex>, composer: C, k: usize) -> Self {
        Self { index, composer, k }
    }

    pub fn answer(&self, query: &str) -> Answer {
        let context = self.index.retrieve(query, self.k);
        let answer = self.composer.compose(query, &context);
        Answer { answer, context }
    }

    pub fn index(&self) -> &DocumentIndex {
        &self.index
    }
}
