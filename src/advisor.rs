//! One entry point for the whole advising flow: audit, suggestions and an
//! optional grounded answer, returned as plain serializable data.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::answer::{ConfiguredComposer, QuestionAnswerer, TextGenerator};
use crate::audit::{AuditResult, RequirementAuditor, Suggestion, SuggestionRanker};
use crate::catalog::{self, Catalog, CatalogError};
use crate::config::{ConfigError, ProgramConfig};
use crate::document::RULES_SOURCE;
use crate::index::{DocumentIndex, IndexBuildError};
use crate::types::Answer;

pub const CATALOG_FILE: &str = "course_catalog.json";

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Index(#[from] IndexBuildError),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdviceRequest {
    #[serde(default)]
    pub completed: Vec<String>,
    /// Raw comma-separated interest tags.
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub question: String,
    pub top_k: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdviceResponse {
    /// Echoed verbatim, unknown codes included.
    pub completed: Vec<String>,
    pub interests: Vec<String>,
    pub audit: AuditResult,
    pub suggestions: Vec<Suggestion>,
    pub answer: Option<Answer>,
}

pub struct Advisor {
    config: ProgramConfig,
    catalog: Catalog,
    answerer: QuestionAnswerer<ConfiguredComposer>,
}

impl Advisor {
    pub fn new(
        config: ProgramConfig,
        catalog: Catalog,
        rules_text: &str,
        generator: Option<Arc<dyn TextGenerator>>,
    ) -> Result<Self, AdvisorError> {
        config.validate()?;
        if rules_text.trim().is_empty() {
            return Err(CatalogError::EmptyRules.into());
        }

        let index = DocumentIndex::from_catalog(RULES_SOURCE, rules_text, &catalog)?;
        let composer = ConfiguredComposer::from_config(&config.generation, generator);
        tracing::info!(delegating = composer.is_delegating(), "advisor ready");

        let answerer = QuestionAnswerer::new(Arc::new(index), composer, config.answer_k);
        Ok(Self {
            config,
            catalog,
            answerer,
        })
    }

    /// Load `program_rules.md` and `course_catalog.json` from `dir`.
    pub fn from_data_dir(
        dir: &Path,
        config: ProgramConfig,
        generator: Option<Arc<dyn TextGenerator>>,
    ) -> Result<Self, AdvisorError> {
        let rules_text = catalog::load_rules(&dir.join(RULES_SOURCE))?;
        let catalog = Catalog::load(&dir.join(CATALOG_FILE))?;
        Self::new(config, catalog, &rules_text, generator)
    }

    pub fn audit<S: AsRef<str>>(&self, completed: &[S]) -> AuditResult {
        RequirementAuditor::from_config(&self.catalog, &self.config).audit(completed)
    }

    pub fn suggest_next<S, T>(&self, completed: &[S], interests: &[T], top_k: usize) -> Vec<Suggestion>
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        SuggestionRanker::from_config(&self.catalog, &self.config).suggest_next(completed, interests, top_k)
    }

    /// `None` for a blank question; retrieval is skipped entirely.
    pub fn answer(&self, question: &str) -> Option<Answer> {
        if question.trim().is_empty() {
            return None;
        }
        Some(self.answerer.answer(question))
    }

    pub fn advise(&self, request: &AdviceRequest) -> AdviceResponse {
        let interests = parse_interests(&request.interests);
        let top_k = request.top_k.unwrap_or(self.config.default_top_k);

        AdviceResponse {
            completed: request.completed.clone(),
            audit: self.audit(request.completed.as_slice()),
            suggestions: self.suggest_next(request.completed.as_slice(), interests.as_slice(), top_k),
            answer: self.answer(&request.question),
            interests,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &ProgramConfig {
        &self.config
    }

    pub fn index(&self) -> &DocumentIndex {
        self.answerer.index()
    }
}

/// Comma-separated tags: trimmed, lower-cased, empties dropped, first
/// occurrence kept.
pub fn parse_interests(raw: &str) -> Vec<String> {
    let mut interests: Vec<String> = Vec::new();
    for tag in raw.split(',').map(|t| t.trim().to_lowercase()) {
        if !tag.is_empty() && !interests.contains(&tag) {
            interests.push(tag);
        }
    }
    interests
}
