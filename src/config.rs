use std::path::PathBuf;
use std::time::Duration;

pub const BASE_URL: &str = "https://www.prydwen.gg";
pub const LISTING_PATH: &str = "/zenless/characters";
const USER_AGENT: &str = concat!("prydwen_builds/", env!("CARGO_PKG_VERSION"));
const TIMEOUT_SECS: u64 = 30;

/// Settings for one scrape run.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Site origin prepended to every relative character link.
    pub base_url: String,
    pub listing_url: String,
    pub out_dir: PathBuf,
    pub user_agent: String,
    pub timeout: Duration,
    /// Explicit character pages; when non-empty the listing page is not fetched.
    pub characters: Vec<String>,
    pub limit: Option<usize>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            listing_url: format!("{}{}", BASE_URL, LISTING_PATH),
            out_dir: PathBuf::from("."),
            user_agent: USER_AGENT.to_string(),
            timeout: Duration::from_secs(TIMEOUT_SECS),
            characters: Vec::new(),
            limit: None,
        }
    }
}

impl ScrapeConfig {
    /// Point the run at another origin; the listing URL follows it.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        self.listing_url = format!("{}{}", base_url, LISTING_PATH);
        self.base_url = base_url.to_string();
        self
    }

    /// Absolute URL for a character page given either a full URL or a site-relative path.
    pub fn resolve(&self, link: &str) -> String {
        if link.starts_with("http://") || link.starts_with("https://") {
            link.to_string()
        } else {
            format!("{}{}", self.base_url, link)
        }
    }
}
