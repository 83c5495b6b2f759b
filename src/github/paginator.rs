use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

pub struct Paginator<'a> {
    client: &'a Client,
}

impl<'a> Paginator<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Request `page=1,2,3…` until a page comes back with no items.
    ///
    /// Any transport error, non-success status or undecodable page aborts
    /// the whole listing; partial results are discarded.
    pub async fn fetch_until_empty<T: DeserializeOwned>(&self, base_url: &str) -> Result<Vec<T>> {
        let mut all_items = Vec::new();
        let mut page: u32 = 1;

        loop {
            let separator = if base_url.contains('?') { "&" } else { "?" };
            let url = format!("{}{}page={}", base_url, separator, page);

            tracing::debug!("Fetching: {}", url);
            let response = self.client.get(&url).send().await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(Error::GitHubApi(format!(
                    "Failed to fetch page {}: {} - {}",
                    page, status, body
                )));
            }

            let body = response.text().await?;
            if body.trim().is_empty() {
                break;
            }

            let items: Vec<T> = serde_json::from_str(&body).map_err(|e| {
                Error::ParseError(format!("page {} of {}: {}", page, base_url, e))
            })?;
            if items.is_empty() {
                break;
            }

            tracing::info!("Page {}: {} items", page, items.len());
            all_items.extend(items);
            page += 1;
        }

        Ok(all_items)
    }
}
