pub mod config;
pub mod error;
pub mod models;
pub mod github;
pub mod llm;
pub mod pipeline;
pub mod storage;
pub mod report;

pub use config::{Config, LlmConfig, PipelineConfig};
pub use error::{Error, Result};
pub use github::{GitHubClient, ReadmeSource};
pub use llm::{Classifier, LLMProvider, OpenAiProvider, PromptVariant};
pub use pipeline::{Enricher, RunSummary, StarPipeline};
pub use storage::Checkpoint;
