use async_trait::async_trait;
use crate::error::Result;

#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Send one system instruction and one user turn, return the text of the
    /// first completion. An empty string means the model produced nothing.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
    fn name(&self) -> &str;
}
