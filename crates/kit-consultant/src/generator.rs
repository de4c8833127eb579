//! The text-generation seam.

use async_trait::async_trait;

use crate::error::ConsultantResult;

/// One question for the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub system_instruction: String,
    /// The shopper's text, sent as typed.
    pub prompt: String,
}

impl GenerationRequest {
    pub fn new(system_instruction: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            system_instruction: system_instruction.into(),
            prompt: prompt.into(),
        }
    }
}

/// Something that can answer a question with text.
///
/// An empty string is a valid answer; callers decide how to show it.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> ConsultantResult<String>;
}
