use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{Config, PipelineConfig};
use crate::error::Result;
use crate::github::GitHubClient;
use crate::llm::{Classifier, OpenAiProvider};
use crate::pipeline::enricher::Enricher;
use crate::report;
use crate::storage::Checkpoint;

/// What a run did, for the caller to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub listed: usize,
    pub listing_cached: bool,
    pub enriched: usize,
    pub enrichment_cached: bool,
    pub enrichment_skipped: bool,
    pub report_path: PathBuf,
}

/// The whole run: list, enrich (unless cached or unconfigured), save,
/// render.
pub struct StarPipeline {
    github: Arc<GitHubClient>,
    enricher: Option<Enricher>,
    config: Config,
}

impl StarPipeline {
    /// Wire up real clients from `config`. Enrichment is left out when no
    /// LLM endpoint is configured.
    pub fn from_config(config: Config) -> Result<Self> {
        config.validate()?;
        let github = Arc::new(GitHubClient::with_base_url(
            &config.github_token,
            &config.github_api_url,
        )?);

        let enricher = match &config.llm {
            Some(llm) => {
                let provider = OpenAiProvider::new(llm)?;
                let classifier = Classifier::new(
                    Arc::new(provider),
                    config.prompt,
                    config.max_readme_chars,
                );
                Some(Enricher::new(
                    github.clone(),
                    classifier,
                    PipelineConfig::from(&config),
                ))
            }
            None => None,
        };

        Ok(Self {
            github,
            enricher,
            config,
        })
    }

    pub async fn run(&self) -> Result<RunSummary> {
        let username = self.config.require_username()?;

        // Step 1: starred listing, from checkpoint when possible
        let mut all_star = if self.config.refresh {
            Vec::new()
        } else {
            Checkpoint::load(self.config.all_star_path())?
        };
        let listing_cached = !all_star.is_empty();
        if listing_cached {
            tracing::info!("Using {} cached repositories", all_star.len());
        } else {
            all_star = self.github.list_starred(username).await?;
            tracing::info!("Found {} starred repositories", all_star.len());
            Checkpoint::save(&all_star, self.config.all_star_path())?;
        }

        // Step 2: enrichment, from checkpoint when possible
        let mut tagged = if self.config.refresh {
            Vec::new()
        } else {
            Checkpoint::load(self.config.ai_tag_path())?
        };
        let enrichment_cached = !tagged.is_empty();
        let mut enrichment_skipped = false;
        if enrichment_cached {
            tracing::info!("Using {} cached classifications", tagged.len());
        } else if let Some(enricher) = &self.enricher {
            tagged = enricher.enrich(all_star.clone()).await;
            Checkpoint::save(&tagged, self.config.ai_tag_path())?;
        } else {
            tracing::info!("No LLM configured, rendering listing without tags");
            enrichment_skipped = true;
            tagged = all_star.clone();
        }

        // Step 3: report
        let markdown = if self.config.group_report {
            report::render_grouped(&tagged)
        } else {
            report::render(&tagged)
        };
        let report_path = self.config.report_path();
        report::write_report(&report_path, &markdown)?;

        Ok(RunSummary {
            listed: all_star.len(),
            listing_cached,
            enriched: if enrichment_skipped { 0 } else { tagged.len() },
            enrichment_cached,
            enrichment_skipped,
            report_path,
        })
    }
}
