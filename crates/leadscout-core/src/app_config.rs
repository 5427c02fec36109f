use std::path::PathBuf;
use std::time::Duration;

/// URL scheme used when turning a bare host into a request URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Platform root domain appended to bare candidate labels.
    pub root_domain: String,
    pub scheme: Scheme,
    /// Directory holding every JSON/CSV sink.
    pub data_dir: PathBuf,
    pub log_level: String,
    pub user_agent: String,
    pub verify_timeout_ms: u64,
    pub fetch_timeout_ms: u64,
    pub verify_concurrency: usize,
    pub scrape_concurrency: usize,
    pub scrape_limit: usize,
    pub throttle_min_ms: u64,
    pub throttle_max_ms: u64,
    /// Minimum size of the discovered subdomain list after padding.
    pub discovery_target: usize,
    pub enrich_limit: usize,
    pub enrich_pause_min_ms: u64,
    pub enrich_pause_max_ms: u64,
}

impl AppConfig {
    #[must_use]
    pub fn verify_timeout(&self) -> Duration {
        Duration::from_millis(self.verify_timeout_ms)
    }

    #[must_use]
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    #[must_use]
    pub fn discovered_path(&self) -> PathBuf {
        self.data_dir.join("discovered_subdomains.json")
    }

    #[must_use]
    pub fn scraped_json_path(&self) -> PathBuf {
        self.data_dir.join("scraped_data.json")
    }

    #[must_use]
    pub fn scraped_csv_path(&self) -> PathBuf {
        self.data_dir.join("scraped_data.csv")
    }

    #[must_use]
    pub fn categorized_csv_path(&self) -> PathBuf {
        self.data_dir.join("categorized_by_country.csv")
    }

    #[must_use]
    pub fn enriched_csv_path(&self) -> PathBuf {
        self.data_dir.join("enriched_contacts.csv")
    }
}
