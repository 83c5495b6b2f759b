use std::sync::Arc;

use crate::llm::parser::parse_classification;
use crate::llm::prompts::PromptVariant;
use crate::llm::provider::LLMProvider;
use crate::models::Classification;

/// Turns README text into a [`Classification`]. Never fails: any provider or
/// parse problem yields an empty classification.
pub struct Classifier {
    provider: Arc<dyn LLMProvider>,
    prompt: PromptVariant,
    max_chars: usize,
}

impl Classifier {
    pub fn new(provider: Arc<dyn LLMProvider>, prompt: PromptVariant, max_chars: usize) -> Self {
        Self {
            provider,
            prompt,
            max_chars,
        }
    }

    pub async fn classify(&self, text: &str) -> Classification {
        let input = truncate_chars(text, self.max_chars);

        let completion = match self.provider.complete(self.prompt.instruction(), input).await {
            Ok(completion) => completion,
            Err(e) => {
                tracing::warn!("{} request failed: {}", self.provider.name(), e);
                return Classification::default();
            }
        };

        match parse_classification(&completion) {
            Ok(classification) => classification,
            Err(e) => {
                tracing::warn!("Discarding model output: {}", e);
                Classification::default()
            }
        }
    }
}

/// First `max_chars` code points of `text`, borrowed.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
