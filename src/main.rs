use anyhow::{bail, Result};
use clap::Parser;
use game_localizer::batch::{run_batch, RunOptions};
use game_localizer::config::Config;
use game_localizer::debug::DebugProvider;
use game_localizer::openrouter::OpenRouterClient;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "game-localizer")]
#[command(about = "Localize game text with screenshot context using LLMs")]
#[command(version)]
struct Args {
    /// Path to the data file (semicolon-separated)
    #[arg(long)]
    data: PathBuf,

    /// Directory containing game screenshots
    #[arg(long)]
    imgs: PathBuf,

    /// Directory to save output files
    #[arg(long)]
    output: PathBuf,

    /// Use mock responses instead of calling the API
    #[arg(long)]
    debug: bool,

    /// Only process the first N rows (0 processes all)
    #[arg(long)]
    limit: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("game_localizer=info".parse()?),
        )
        .init();

    let args = Args::parse();

    if !args.data.is_file() {
        bail!("Data file {} does not exist", args.data.display());
    }
    if !args.imgs.is_dir() {
        bail!("Images directory {} does not exist", args.imgs.display());
    }

    // Load configuration from environment
    let config = Config::from_env()?;

    let options = RunOptions {
        table_path: args.data,
        images_dir: args.imgs,
        output_dir: args.output,
        limit: args.limit,
        row_delay: config.row_delay,
        diagnostics: args.debug,
    };
    let models = config.models.clone();

    let reports = if args.debug {
        info!("Debug mode: no API calls will be made");
        run_batch(&DebugProvider, &models, &options).await?
    } else {
        let client = OpenRouterClient::new(config);
        run_batch(&client, &models, &options).await?
    };

    for report in &reports {
        info!(
            "{}: {} processed, {} skipped, {} errored -> {}, {}",
            report.model.label,
            report.processed,
            report.skipped,
            report.errored,
            report.table_path.display(),
            report.records_path.display()
        );
    }

    Ok(())
}
