use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Text generation request failed: {0}")]
    Request(String),
    #[error("Text generation timed out")]
    Timeout,
}

/// External text-generation collaborator. Implementations own their
/// transport, timeout and retry policy.
pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

impl<G: TextGenerator + ?Sized> TextGenerator for std::sync::Arc<G> {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        (**self).generate(prompt)
    }
}

impl<G: TextGenerator + ?Sized> TextGenerator for Box<G> {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        (**self).generate(prompt)
    }
}
