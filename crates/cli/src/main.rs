use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use matcher::FilterPipeline;
use matcher::filters::MinimumRatingFilter;
use ratings::{DEFAULT_API_KEY, DEFAULT_BASE_URL, OmdbClient, OmdbConfig};
use session::{Control, SearchSession};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

const PROMPT: &str = "Enter your search terms ('exit' to quit, 'last' to see previous searches): ";

/// Jetflix - interactive movie search
#[derive(Parser)]
#[command(name = "jetflix")]
#[command(about = "Search a movie catalog with field and fuzzy title queries", long_about = None)]
struct Cli {
    /// Path to the CSV movie catalog
    #[arg(short, long, env = "JETFLIX_CATALOG", default_value = "movies.csv")]
    catalog: PathBuf,

    /// Base URL of the OMDb rating service
    #[arg(long, env = "OMDB_URL", default_value = DEFAULT_BASE_URL)]
    omdb_url: String,

    /// OMDb API key
    #[arg(long, env = "OMDB_API_KEY", default_value = DEFAULT_API_KEY)]
    api_key: String,

    /// IMDb id sent with every lookup (OMDb then ignores the title)
    #[arg(long, env = "OMDB_IMDB_ID")]
    imdb_id: Option<String>,

    /// Per-request timeout for rating lookups, in seconds
    #[arg(long, env = "OMDB_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Only display movies rated at least this high
    #[arg(long)]
    min_rating: Option<f64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr and stay quiet by default so they don't interleave with results
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let catalog = catalog::load(&cli.catalog)
        .with_context(|| format!("Failed to load movie catalog {}", cli.catalog.display()))?;
    info!("Loaded {} movies in {:?}", catalog.len(), start.elapsed());

    let client = OmdbClient::new(OmdbConfig {
        base_url: cli.omdb_url,
        api_key: cli.api_key,
        imdb_id: cli.imdb_id,
        timeout: cli.timeout_secs.map(Duration::from_secs),
    })
    .context("Failed to build rating client")?;

    let mut filters = FilterPipeline::new();
    if let Some(min_rating) = cli.min_rating {
        filters = filters.add_filter(MinimumRatingFilter::new(min_rating));
    }

    let mut session = SearchSession::new(catalog, client).with_filters(filters);
    run_repl(&mut session).await
}

/// Read one query per line until `exit` or end of input.
async fn run_repl(session: &mut SearchSession<OmdbClient>) -> Result<()> {
    let mut stdout = std::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", "Welcome to Jetflix Movie Search Engine!".bold().blue());

    loop {
        print!("\n{}", PROMPT.green());
        stdout.flush().context("Failed to write prompt")?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            // EOF behaves like exit
            println!();
            break;
        };

        if session.handle(&line, &mut stdout).await? == Control::Exit {
            break;
        }
    }

    println!("\n{}", "Thank you for using Jetflix Movie Search Engine!".bold().blue());
    Ok(())
}
