use async_trait::async_trait;

use crate::models::ReadmeContent;

/// Where enrichment gets README text from. `None` means "skip this
/// repository"; implementations never fail.
#[async_trait]
pub trait ReadmeSource: Send + Sync {
    async fn fetch_readme(&self, repo_api_url: &str) -> Option<ReadmeContent>;
}
