use scraper::Html;
use tracing::{info, warn};

use super::dom::Matcher;
use super::layout::character_card;

/// Collect absolute character page URLs from the listing page, in document order.
pub fn character_urls(doc: &Html, base_url: &str) -> Vec<String> {
    let cards = character_card().find_all(doc.root_element());
    if cards.is_empty() {
        warn!("Could not find character cards. Listing page format must have changed.");
        return Vec::new();
    }

    let anchor = Matcher::tag("a");
    let urls: Vec<String> = cards
        .into_iter()
        .enumerate()
        .filter_map(|(i, card)| {
            let href = anchor
                .find_first(card)
                .and_then(|a| a.value().attr("href"));
            match href {
                Some(href) => Some(format!("{}{}", base_url, href)),
                None => {
                    warn!("Character card #{} has no link, skipping", i);
                    None
                }
            }
        })
        .collect();

    info!("Found {} character pages", urls.len());
    urls
}
