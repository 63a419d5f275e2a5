use indicatif::ProgressBar;
use scraper::Html;
use tracing::{info, warn};

use crate::config::ScrapeConfig;
use crate::fetcher::FetchDocument;
use crate::model::Roster;
use crate::parser::{extract, listing};

/// Character pages to visit: the explicit list if given, otherwise the listing page.
pub async fn collect_urls<F: FetchDocument>(fetcher: &F, config: &ScrapeConfig) -> Vec<String> {
    let mut urls = if config.characters.is_empty() {
        info!("Fetching character listing: {}", config.listing_url);
        match fetcher.fetch_document(&config.listing_url).await {
            Some(doc) => listing::character_urls(&doc, &config.base_url),
            None => {
                warn!("Could not fetch character listing, no characters to process");
                Vec::new()
            }
        }
    } else {
        config.characters.iter().map(|c| config.resolve(c)).collect()
    };

    if let Some(limit) = config.limit {
        urls.truncate(limit);
    }
    urls
}

/// Fetch and extract each page in order, one at a time.
pub async fn collect_roster<F: FetchDocument>(
    fetcher: &F,
    urls: &[String],
    pb: &ProgressBar,
) -> Roster {
    let mut roster = Roster::default();
    for url in urls {
        info!("Now processing: {}", url);
        let doc = fetcher.fetch_document(url).await;
        absorb(&mut roster, url, doc);
        info!("Finished processing: {}", url);
        pb.inc(1);
    }
    roster
}

fn absorb(roster: &mut Roster, url: &str, doc: Option<Html>) {
    let Some(doc) = doc else {
        warn!("Skipping {}: page unavailable", url);
        return;
    };
    match extract::extract_character(&doc) {
        Ok(record) => roster.insert(record),
        Err(e) => warn!("Skipping {}: {}", url, e),
    }
}
