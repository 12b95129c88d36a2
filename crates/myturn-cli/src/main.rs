mod dry_run;
mod run;
mod sweep;

use clap::{Parser, Subcommand};
use myturn_core::AppConfig;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "myturn-cli")]
#[command(about = "Search vaccine site availability and post each open site")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search every point in the dataset and publish each distinct site
    Run {
        /// Print messages to stdout instead of posting them
        #[arg(long)]
        dry_run: bool,
        /// Only search the first N points of the dataset
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Validate configuration and the coordinate dataset, then exit
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    execute(cli.command, |key| std::env::var(key)).await
}

/// Resolves configuration through `lookup` and runs `command`.
async fn execute<F>(command: Commands, lookup: F) -> anyhow::Result<()>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let config = myturn_core::load_app_config_with(lookup)?;
    init_tracing(&config)?;
    tracing::debug!(?config, "configuration loaded");

    match command {
        Commands::Run { dry_run, limit } => {
            run::run_command(&config, dry_run, limit).await?;
        }
        Commands::Check => run::check_command(&config)?,
    }
    Ok(())
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    // A subscriber may already be installed (tests run `execute` repeatedly).
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
    Ok(())
}
