use std::sync::Arc;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::{mpsc, Semaphore};

use crate::config::PipelineConfig;
use crate::github::ReadmeSource;
use crate::llm::Classifier;
use crate::models::StarredRepository;

/// Fetches each repository's README and classifies it, at most
/// `concurrency_limit` repositories at a time.
pub struct Enricher {
    readmes: Arc<dyn ReadmeSource>,
    classifier: Arc<Classifier>,
    config: PipelineConfig,
}

impl Enricher {
    pub fn new(
        readmes: Arc<dyn ReadmeSource>,
        classifier: Classifier,
        config: PipelineConfig,
    ) -> Self {
        Self {
            readmes,
            classifier: Arc::new(classifier),
            config,
        }
    }

    /// Returns the repositories that had a README, each with its
    /// classification attached (empty if the model answer was unusable).
    /// Output order follows completion order, not input order.
    pub async fn enrich(&self, repos: Vec<StarredRepository>) -> Vec<StarredRepository> {
        let total = repos.len();
        let semaphore = Arc::new(Semaphore::new(self.config.concurrency_limit));
        // Room for every result, so a worker never waits on the collector
        // while holding a permit.
        let (tx, mut rx) = mpsc::channel(total.max(1));
        let pb = progress_bar(total);

        for mut repo in repos {
            let readmes = self.readmes.clone();
            let classifier = self.classifier.clone();
            let sem = semaphore.clone();
            let tx = tx.clone();
            let pb = pb.clone();

            tokio::spawn(async move {
                let Ok(_permit) = sem.acquire_owned().await else {
                    return;
                };

                let Some(readme) = readmes.fetch_readme(&repo.url).await else {
                    tracing::warn!("Skipping {}: no README", repo.full_name);
                    pb.inc(1);
                    return;
                };

                repo.classification = classifier.classify(&readme.text).await;
                if repo.classification.is_empty() {
                    tracing::warn!("{} has no classification", repo.full_name);
                } else {
                    tracing::debug!(
                        "{} tagged: {}",
                        repo.full_name,
                        repo.classification.tags.join(", ")
                    );
                }

                pb.inc(1);
                let _ = tx.send(repo).await;
            });
        }
        // Channel closes once the last worker drops its sender.
        drop(tx);

        let mut enriched = Vec::with_capacity(total);
        while let Some(repo) = rx.recv().await {
            enriched.push(repo);
        }

        pb.finish_with_message("Enrichment complete");
        tracing::info!(
            "Enriched {} of {} repositories ({} dropped)",
            enriched.len(),
            total,
            total - enriched.len()
        );
        enriched
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} repos")
        .map(|s| s.progress_chars("#>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::llm::{LLMProvider, PromptVariant};
    use crate::models::{Classification, ReadmeContent};
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Default)]
    struct Gauge {
        in_flight: AtomicUsize,
        peak: AtomicUsize,
    }

    impl Gauge {
        fn enter(&self) {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
        }

        fn leave(&self) {
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
        }
    }

    /// Serves "README of {url}" except for URLs ending in `/missing`.
    struct FakeReadmes {
        gauge: Arc<Gauge>,
    }

    #[async_trait]
    impl ReadmeSource for FakeReadmes {
        async fn fetch_readme(&self, repo_api_url: &str) -> Option<ReadmeContent> {
            self.gauge.enter();
            tokio::time::sleep(Duration::from_millis(5)).await;
            if repo_api_url.ends_with("/missing") {
                self.gauge.leave();
                return None;
            }
            Some(ReadmeContent {
                text: format!("README of {}", repo_api_url),
            })
        }
    }

    /// Tags each README with the repo name it mentions; answers garbage for
    /// anything under `/garbled`.
    struct FakeModel {
        gauge: Arc<Gauge>,
    }

    #[async_trait]
    impl LLMProvider for FakeModel {
        async fn complete(&self, _system: &str, user: &str) -> Result<String> {
            tokio::time::sleep(Duration::from_millis(5)).await;
            self.gauge.leave();
            if user.contains("/garbled") {
                return Ok("I could not decide".to_string());
            }
            let name = user.rsplit('/').next().unwrap_or_default();
            Ok(format!(
                r#"{{"group":"G","tags":["{}","rust"],"desc":"about {}"}}"#,
                name, name
            ))
        }

        fn name(&self) -> &str {
            "fake"
        }
    }

    fn repo(path: &str) -> StarredRepository {
        StarredRepository {
            name: path.rsplit('/').next().unwrap().to_string(),
            full_name: path.to_string(),
            url: format!("https://api.test/repos/{}", path),
            html_url: format!("https://github.test/{}", path),
            description: None,
            homepage: None,
            language: None,
            topics: Vec::new(),
            stargazers_count: 0,
            classification: Classification::default(),
        }
    }

    fn enricher(gauge: &Arc<Gauge>, limit: usize) -> Enricher {
        let classifier = Classifier::new(
            Arc::new(FakeModel { gauge: gauge.clone() }),
            PromptVariant::Detailed,
            60_000,
        );
        Enricher::new(
            Arc::new(FakeReadmes { gauge: gauge.clone() }),
            classifier,
            PipelineConfig {
                concurrency_limit: limit,
            },
        )
    }

    #[tokio::test]
    async fn test_never_exceeds_admission_limit() {
        let gauge = Arc::new(Gauge::default());
        let repos: Vec<_> = (0..200).map(|i| repo(&format!("owner/r{}", i))).collect();

        let enriched = enricher(&gauge, 30).enrich(repos).await;

        assert_eq!(enriched.len(), 200);
        let peak = gauge.peak.load(Ordering::SeqCst);
        assert_eq!(peak, 30, "peak concurrency should fill the pool exactly");
        assert_eq!(gauge.in_flight.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_limit_of_one_serializes_work() {
        let gauge = Arc::new(Gauge::default());
        let repos: Vec<_> = (0..10).map(|i| repo(&format!("owner/r{}", i))).collect();

        let enriched = enricher(&gauge, 1).enrich(repos).await;

        assert_eq!(enriched.len(), 10);
        assert_eq!(gauge.peak.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_readme_dropped_and_bad_answer_kept_untagged() {
        let gauge = Arc::new(Gauge::default());
        let repos = vec![
            repo("foo/bar"),
            repo("gone/missing"),
            repo("noise/garbled"),
            repo("baz/qux"),
        ];

        let enriched = enricher(&gauge, 30).enrich(repos).await;

        let names: HashSet<_> = enriched.iter().map(|r| r.full_name.as_str()).collect();
        assert_eq!(names, HashSet::from(["foo/bar", "noise/garbled", "baz/qux"]));

        for r in &enriched {
            if r.full_name == "noise/garbled" {
                assert!(r.classification.is_empty());
            } else {
                assert_eq!(
                    r.classification,
                    Classification {
                        group: "G".into(),
                        tags: vec![r.name.clone(), "rust".into()],
                        desc: format!("about {}", r.name),
                    }
                );
            }
        }
    }

    #[tokio::test]
    async fn test_empty_input() {
        let gauge = Arc::new(Gauge::default());
        assert!(enricher(&gauge, 30).enrich(Vec::new()).await.is_empty());
    }
}
