use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use startagger::{Config, PromptVariant, StarPipeline};

#[derive(Parser, Debug)]
#[command(name = "startagger")]
#[command(version = "0.1.0")]
#[command(about = "Tag a GitHub user's starred repositories with an LLM and render a catalog")]
struct Args {
    /// GitHub user whose stars are listed (falls back to GITHUB_USERNAME)
    #[arg(short, long)]
    username: Option<String>,

    /// Directory for allStar.json, aiTagProcess.json and starProject.md
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Ignore existing checkpoints and fetch everything again
    #[arg(long)]
    refresh: bool,

    /// Instruction sent to the model
    #[arg(long, value_enum, default_value_t = PromptVariant::Tags)]
    prompt: PromptVariant,

    /// Group the report by classification group
    #[arg(long)]
    group: bool,

    /// Maximum repositories enriched at once (overrides CONCURRENCY_LIMIT)
    #[arg(long)]
    concurrency: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("startagger=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration, flags win over the environment
    let mut config = Config::from_env()?;
    if let Some(username) = args.username {
        config.username = Some(username);
    }
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(concurrency) = args.concurrency {
        config.concurrency_limit = concurrency;
    }
    config.refresh = args.refresh;
    config.prompt = args.prompt;
    config.group_report = args.group;
    config.validate()?;

    let pipeline = StarPipeline::from_config(config)?;
    let summary = pipeline.run().await?;

    tracing::info!(
        listed = summary.listed,
        listing_cached = summary.listing_cached,
        enriched = summary.enriched,
        enrichment_cached = summary.enrichment_cached,
        enrichment_skipped = summary.enrichment_skipped,
        "Catalog written to {}",
        summary.report_path.display()
    );

    Ok(())
}
