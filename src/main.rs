mod config;
mod error;
mod fetcher;
mod model;
mod output;
mod parser;
mod pipeline;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use scraper::Html;
use tracing::{debug, info, warn};

use config::ScrapeConfig;
use fetcher::HttpFetcher;

#[derive(Parser)]
#[command(name = "prydwen_builds", about = "Zenless Zone Zero build scraper for prydwen.gg")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape every character and write characters_output_<VERSION>.json
    Run {
        /// Version label used in the output file name
        version: String,
        /// Directory the output file is written to
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
        /// Max characters to process (listing order)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Scrape only these character pages (URL or site path); repeatable
        #[arg(short, long = "character")]
        characters: Vec<String>,
        /// Site origin to scrape
        #[arg(long, default_value = config::BASE_URL)]
        base_url: String,
        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },
    /// Extract one saved character page and print its record
    Extract {
        file: PathBuf,
    },
    /// List the character URLs found in a saved listing page
    List {
        file: PathBuf,
        #[arg(long, default_value = config::BASE_URL)]
        base_url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            version,
            out_dir,
            limit,
            characters,
            base_url,
            quiet,
        } => {
            let config = ScrapeConfig {
                out_dir,
                limit,
                characters,
                ..ScrapeConfig::default().with_base_url(&base_url)
            };
            run(&config, &version, quiet).await
        }
        Commands::Extract { file } => {
            let doc = read_page(&file)?;
            let record = parser::extract::extract_character(&doc)
                .with_context(|| format!("No character found in {}", file.display()))?;
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        }
        Commands::List { file, base_url } => {
            let doc = read_page(&file)?;
            for url in list_urls(&doc, &base_url) {
                println!("{}", url);
            }
            Ok(())
        }
    }
}

async fn run(config: &ScrapeConfig, version: &str, quiet: bool) -> anyhow::Result<()> {
    let t0 = Instant::now();
    info!("{}: Started processing", chrono::Local::now());

    let fetcher = HttpFetcher::new(config)?;
    let urls = pipeline::collect_urls(&fetcher, config).await;

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(urls.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")?
                .progress_chars("=> "),
        );
        pb
    };

    let roster = pipeline::collect_roster(&fetcher, &urls, &pb).await;
    pb.finish_and_clear();

    if roster.is_empty() {
        warn!("No characters extracted");
    }
    for record in roster.iter() {
        debug!(
            "{}: {} drive disc options, stats {}",
            record.name,
            record.drive_discs.as_ref().map_or(0, |d| d.len()),
            if record.stats.is_some() { "found" } else { "missing" }
        );
    }

    output::write_roster(&roster, &config.out_dir, version)?;

    info!("{}: Completed processing", chrono::Local::now());
    info!(
        "Processed {} of {} characters in {:.1}s",
        roster.len(),
        urls.len(),
        t0.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Listing URLs resolved against `base_url` the same way `run` resolves them.
fn list_urls(doc: &Html, base_url: &str) -> Vec<String> {
    let config = ScrapeConfig::default().with_base_url(base_url);
    parser::listing::character_urls(doc, &config.base_url)
}

fn read_page(file: &Path) -> anyhow::Result<Html> {
    let html = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    Ok(Html::parse_document(&html))
}
