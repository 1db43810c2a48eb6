use crate::error::Result;
use async_trait::async_trait;

/// Answer returned by a semantic collaborator for one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievedAnswer {
    /// Free-form answer text; judged by the caller for negative markers
    pub answer: String,

    /// Section ids cited as evidence, in retrieval order
    pub source_sections: Vec<String>,
}

impl RetrievedAnswer {
    /// Answer with no cited evidence
    #[must_use]
    pub fn without_sources(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            source_sections: Vec::new(),
        }
    }
}

/// Narrow boundary to the semantic retrieval/answer collaborator.
///
/// Implementations may be anything from the bundled keyword index to a
/// remote retrieval-augmented LLM chain. The scoring core issues one
/// question per top-level risk factor and treats each call independently:
/// an error from one question must not poison another.
#[async_trait]
pub trait SemanticIndex: Send + Sync {
    /// Answer a natural-language question about the contract
    async fn answer(&self, question: &str) -> Result<RetrievedAnswer>;
}
