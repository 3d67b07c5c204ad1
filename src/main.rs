use anyhow::Result;
use clap::Parser;
use pubmed_harvest::config::{find_config_file, load_config, Config};
use pubmed_harvest::harvest::harvest_category;
use pubmed_harvest::{Category, DateRange, EutilsClient};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// PubMed Harvest - Download abstracts for a publication date range
#[derive(Parser, Debug)]
#[command(name = "pubmed-harvest")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Download PubMed abstracts for a date range, split into background and reference corpora",
    long_about = None
)]
struct Cli {
    /// Directory the output JSON files are written to
    #[arg(long, alias = "output_directory", default_value = ".")]
    output_directory: PathBuf,

    /// Start of the publication date range (e.g. 2023/01/01)
    #[arg(long)]
    start: String,

    /// End of the publication date range (e.g. 2023/12/31)
    #[arg(long)]
    end: String,

    /// Maximum number of documents to retrieve per category
    #[arg(long, alias = "num_docs", default_value_t = 10_000)]
    num_docs: usize,

    /// Configuration file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| format!("pubmed_harvest={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration from file if specified or found in default locations
    let config = if let Some(config_path) = &cli.config {
        load_config(config_path)?
    } else if let Some(config_path) = find_config_file() {
        tracing::info!("Using config file: {}", config_path.display());
        load_config(&config_path)?
    } else {
        Config::default()
    };

    let client = EutilsClient::new(config.contact)?;
    let range = DateRange::new(cli.start, cli.end);

    for category in Category::ALL {
        let downloaded = harvest_category(
            &client,
            &range,
            category,
            cli.num_docs,
            &cli.output_directory,
        )
        .await?;

        if let Some(count) = downloaded {
            println!("{} {} documents downloaded", count, category);
        }
    }

    Ok(())
}
