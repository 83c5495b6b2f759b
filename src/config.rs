use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::llm::PromptVariant;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_LLM_MODEL: &str = "deepseek-chat";
pub const DEFAULT_CONCURRENCY_LIMIT: usize = 30;
pub const DEFAULT_MAX_README_CHARS: usize = 60_000;

pub const ALL_STAR_FILE: &str = "allStar.json";
pub const AI_TAG_FILE: &str = "aiTagProcess.json";
pub const REPORT_FILE: &str = "starProject.md";

/// Credentials and endpoint for the OpenAI-compatible completion API.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

/// Everything a run needs, resolved once at process start.
///
/// Components receive the pieces they need from here; none of them look at
/// the environment on their own.
#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: String,
    pub github_api_url: String,
    pub username: Option<String>,
    /// `None` when either `LLM_TOKEN` or `LLM_BASEURL` is missing, which
    /// turns the enrichment stage off.
    pub llm: Option<LlmConfig>,
    pub concurrency_limit: usize,
    pub max_readme_chars: usize,
    pub data_dir: PathBuf,
    pub prompt: PromptVariant,
    pub refresh: bool,
    pub group_report: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let github_token = non_empty("GITHUB_TOKEN")
            .ok_or_else(|| Error::Config("GITHUB_TOKEN environment variable not set".to_string()))?;

        let github_api_url = non_empty("GITHUB_API_URL")
            .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string());

        let username = non_empty("GITHUB_USERNAME");

        let llm = match (non_empty("LLM_TOKEN"), non_empty("LLM_BASEURL")) {
            (Some(api_key), Some(base_url)) => Some(LlmConfig {
                api_key,
                base_url,
                model: non_empty("LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
            }),
            _ => None,
        };

        let concurrency_limit = match non_empty("CONCURRENCY_LIMIT") {
            Some(v) => v.trim().parse().map_err(|_| {
                Error::Config(format!("CONCURRENCY_LIMIT must be a positive integer, got {:?}", v))
            })?,
            None => DEFAULT_CONCURRENCY_LIMIT,
        };

        let data_dir = non_empty("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let config = Self {
            github_token,
            github_api_url,
            username,
            llm,
            concurrency_limit,
            max_readme_chars: DEFAULT_MAX_README_CHARS,
            data_dir,
            prompt: PromptVariant::default(),
            refresh: false,
            group_report: false,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.concurrency_limit == 0 {
            return Err(Error::Config("concurrency limit must be at least 1".to_string()));
        }
        if self.max_readme_chars == 0 {
            return Err(Error::Config("README character budget must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn require_username(&self) -> Result<&str> {
        self.username.as_deref().ok_or_else(|| {
            Error::Config("no user given; pass --username or set GITHUB_USERNAME".to_string())
        })
    }

    pub fn all_star_path(&self) -> PathBuf {
        self.data_dir.join(ALL_STAR_FILE)
    }

    pub fn ai_tag_path(&self) -> PathBuf {
        self.data_dir.join(AI_TAG_FILE)
    }

    pub fn report_path(&self) -> PathBuf {
        self.data_dir.join(REPORT_FILE)
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub concurrency_limit: usize,
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        Self {
            concurrency_limit: config.concurrency_limit,
        }
    }
}
