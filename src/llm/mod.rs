pub mod provider;
pub mod openai;
pub mod prompts;
pub mod parser;
pub mod classifier;

pub use provider::LLMProvider;
pub use openai::OpenAiProvider;
pub use prompts::PromptVariant;
pub use classifier::Classifier;
