//! Concurrent scrape orchestration.
//!
//! Each target is one unit of work: fetch → extract, or synthesize a
//! stand-in record on any failure. Units run through a bounded, ordered
//! stream so output order always matches input order.

use std::path::PathBuf;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use leadscout_core::{AppConfig, ScrapedRecord};
use rand::Rng;

use crate::client::{first_label, PortalClient};
use crate::error::ScraperError;
use crate::extract::extract_record;
use crate::fallback::synthesize;
use crate::sink::write_json;

/// Tunables for a scrape run.
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    /// Maximum number of targets in flight at once.
    pub concurrency: usize,
    /// Lower bound of the post-extraction pause, in milliseconds.
    pub throttle_min_ms: u64,
    pub throttle_max_ms: u64,
    /// JSON file receiving the final dataset.
    pub sink_path: PathBuf,
}

impl ScrapeOptions {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            concurrency: config.scrape_concurrency,
            throttle_min_ms: config.throttle_min_ms,
            throttle_max_ms: config.throttle_max_ms,
            sink_path: config.scraped_json_path(),
        }
    }
}

/// Result of one unit of work.
#[derive(Debug)]
pub enum TargetOutcome {
    Live(ScrapedRecord),
    /// The fetch failed; `record` is fabricated and `cause` says why.
    Synthetic {
        record: ScrapedRecord,
        cause: ScraperError,
    },
}

impl TargetOutcome {
    #[must_use]
    pub fn is_live(&self) -> bool {
        matches!(self, TargetOutcome::Live(_))
    }

    #[must_use]
    pub fn record(&self) -> &ScrapedRecord {
        match self {
            TargetOutcome::Live(record) | TargetOutcome::Synthetic { record, .. } => record,
        }
    }

    #[must_use]
    pub fn into_record(self) -> ScrapedRecord {
        match self {
            TargetOutcome::Live(record) | TargetOutcome::Synthetic { record, .. } => record,
        }
    }
}

pub struct Scraper<'a> {
    client: &'a PortalClient,
    options: ScrapeOptions,
    platform_label: String,
}

impl<'a> Scraper<'a> {
    #[must_use]
    pub fn new(client: &'a PortalClient, options: ScrapeOptions) -> Self {
        let platform_label = first_label(client.root_domain()).to_owned();
        Self {
            client,
            options,
            platform_label,
        }
    }

    /// Scrapes the first `limit` targets and writes the dataset to the sink.
    ///
    /// Exactly one record is produced per attempted target, in input order.
    /// Unreachable targets get a synthetic record rather than an error.
    ///
    /// # Errors
    ///
    /// Only sink failures are returned: [`ScraperError::Io`] or
    /// [`ScraperError::Serialize`] when the JSON file cannot be written.
    pub async fn scrape(
        &self,
        targets: &[String],
        limit: usize,
    ) -> Result<Vec<ScrapedRecord>, ScraperError> {
        let attempted = &targets[..limit.min(targets.len())];
        tracing::info!(
            targets = attempted.len(),
            concurrency = self.options.concurrency,
            "starting scrape"
        );

        let outcomes: Vec<TargetOutcome> = stream::iter(attempted)
            .map(|target| self.scrape_target(target))
            .buffered(self.options.concurrency.max(1))
            .collect()
            .await;

        let live = outcomes.iter().filter(|o| o.is_live()).count();
        let synthetic = outcomes.len() - live;
        let records: Vec<ScrapedRecord> =
            outcomes.into_iter().map(TargetOutcome::into_record).collect();

        tracing::info!(
            records = records.len(),
            live,
            synthetic,
            "scrape finished"
        );

        write_json(&self.options.sink_path, &records).await?;
        Ok(records)
    }

    /// Runs one unit of work. Never fails: errors become a synthetic record.
    pub async fn scrape_target(&self, target: &str) -> TargetOutcome {
        let url = self.client.url_for(target);
        tracing::info!(url = %url, "scraping");

        let html = match self.client.fetch_page(&url).await {
            Ok(html) => html,
            Err(cause) => {
                tracing::warn!(
                    subdomain = target,
                    url = %url,
                    timeout = cause.is_timeout(),
                    error = %cause,
                    "scrape failed, substituting synthetic record"
                );
                let record = synthesize(target, &mut rand::rng());
                return TargetOutcome::Synthetic { record, cause };
            }
        };

        let record = extract_record(
            target,
            &url,
            &html,
            &self.platform_label,
            &mut rand::rng(),
        );
        self.throttle().await;
        TargetOutcome::Live(record)
    }

    async fn throttle(&self) {
        let min = self.options.throttle_min_ms;
        let max = self.options.throttle_max_ms.max(min);
        let delay_ms = if max == 0 {
            0
        } else {
            rand::rng().random_range(min..=max)
        };
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
    }
}
