use async_trait::async_trait;
use reqwest::{header, Client};

use crate::config::DEFAULT_GITHUB_API_URL;
use crate::error::Result;
use crate::github::paginator::Paginator;
use crate::github::readme::ReadmeSource;
use crate::models::{ReadmeContent, ReadmeData, StarredRepository};

const README_SUFFIX: &str = "/readme";

pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(token, DEFAULT_GITHUB_API_URL)
    }

    pub fn with_base_url(token: &str, base_url: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        let mut auth = header::HeaderValue::from_str(&format!("token {}", token))?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("startagger/0.1"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Every repository `username` has starred, in API order.
    pub async fn list_starred(&self, username: &str) -> Result<Vec<StarredRepository>> {
        let url = format!("{}/users/{}/starred", self.base_url, username);
        let paginator = Paginator::new(&self.client);
        tracing::info!("Fetching starred repositories for: {}", username);
        paginator.fetch_until_empty(&url).await
    }

    pub async fn get_readme(&self, repo_api_url: &str) -> Option<ReadmeContent> {
        let url = format!("{}{}", repo_api_url.trim_end_matches('/'), README_SUFFIX);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("README request failed for {}: {}", repo_api_url, e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!("No README for {}: {}", repo_api_url, response.status());
            return None;
        }

        let data: ReadmeData = match response.json().await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("Malformed README payload for {}: {}", repo_api_url, e);
                return None;
            }
        };

        let content = data.decode();
        if content.is_none() {
            tracing::debug!("README for {} is empty or undecodable", repo_api_url);
        }
        content
    }
}

#[async_trait]
impl ReadmeSource for GitHubClient {
    async fn fetch_readme(&self, repo_api_url: &str) -> Option<ReadmeContent> {
        self.get_readme(repo_api_url).await
    }
}
