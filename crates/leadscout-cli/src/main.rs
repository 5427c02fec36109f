mod stages;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "leadscout")]
#[command(about = "Discover platform subdomains and collect lead data from them")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Discover, scrape, export, categorize and enrich in sequence
    Run,
    /// Check candidate subdomains and write the discovered list
    Discover,
    /// Scrape the discovered subdomains into the JSON dataset
    Scrape {
        /// Maximum number of subdomains to scrape (defaults to `LEADSCOUT_SCRAPE_LIMIT`)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Flatten the JSON dataset into CSV
    Export,
    /// Tag each record with a country inferred from its address
    Categorize,
    /// Enrich records that list social profiles
    Enrich {
        /// Number of records to enrich (defaults to `LEADSCOUT_ENRICH_LIMIT`)
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = leadscout_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        None | Some(Commands::Run) => stages::run_all(&config).await?,
        Some(Commands::Discover) => {
            stages::run_discover(&config).await?;
        }
        Some(Commands::Scrape { limit }) => {
            stages::run_scrape_from_file(&config, limit).await?;
        }
        Some(Commands::Export) => stages::run_export(&config).await?,
        Some(Commands::Categorize) => stages::run_categorize(&config).await?,
        Some(Commands::Enrich { limit }) => stages::run_enrich(&config, limit).await?,
    }

    Ok(())
}
