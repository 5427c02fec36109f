//! Contact enrichment for leads that list at least one social profile.

mod social;
mod website;

use std::path::PathBuf;
use std::time::Duration;

use leadscout_core::{AppConfig, ScrapedRecord, SocialPlatform};
use leadscout_scraper::PortalClient;
use rand::Rng;
use serde::Serialize;

use crate::csv_export::write_rows;
use crate::error::ExportError;

pub use social::{
    facebook_profile, instagram_profile, twitter_profile, FacebookProfile, InstagramProfile,
    TwitterProfile,
};
pub use website::WebsiteProfile;

#[derive(Debug, Clone)]
pub struct EnrichOptions {
    /// Number of social-bearing records to enrich.
    pub limit: usize,
    pub pause_min_ms: u64,
    pub pause_max_ms: u64,
    pub sink_path: PathBuf,
}

impl EnrichOptions {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            limit: config.enrich_limit,
            pause_min_ms: config.enrich_pause_min_ms,
            pause_max_ms: config.enrich_pause_max_ms,
            sink_path: config.enriched_csv_path(),
        }
    }
}

/// One row of `enriched_contacts.csv`. Field order is column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnrichedRow {
    pub subdomain: String,
    pub url: String,
    pub original_email: String,
    pub original_phone: String,
    pub company_address: String,
    pub website: String,
    pub facebook_company_name: String,
    pub facebook_description: String,
    pub facebook_contact_info: String,
    pub instagram_business_name: String,
    pub instagram_bio: String,
    pub instagram_contact_button: String,
    pub twitter_display_name: String,
    pub twitter_bio: String,
    pub twitter_location: String,
    pub website_company_name: String,
    pub website_description: String,
    pub website_additional_contacts: String,
    pub facebook_url: String,
    pub instagram_url: String,
    pub twitter_url: String,
}

impl EnrichedRow {
    fn apply_facebook(&mut self, p: FacebookProfile) {
        self.facebook_company_name = p.company_name;
        self.facebook_description = p.description;
        self.facebook_contact_info = p.contact_info;
    }

    fn apply_instagram(&mut self, p: InstagramProfile) {
        self.instagram_business_name = p.business_name;
        self.instagram_bio = p.bio;
        self.instagram_contact_button = p.contact_button;
    }

    fn apply_twitter(&mut self, p: TwitterProfile) {
        self.twitter_display_name = p.display_name;
        self.twitter_bio = p.bio;
        self.twitter_location = p.location;
    }

    fn apply_website(&mut self, p: WebsiteProfile) {
        self.website_company_name = p.company_name;
        self.website_description = p.description;
        self.website_additional_contacts = p.additional_contacts;
    }
}

pub struct Enricher<'a> {
    client: &'a PortalClient,
    options: EnrichOptions,
}

impl<'a> Enricher<'a> {
    #[must_use]
    pub fn new(client: &'a PortalClient, options: EnrichOptions) -> Self {
        Self { client, options }
    }

    /// Enriches the first `limit` records that have a social URL, writes the
    /// CSV sink, and returns the rows.
    ///
    /// Records are processed one at a time with a random pause in between.
    ///
    /// # Errors
    ///
    /// Only sink failures are returned: [`ExportError::Io`] or
    /// [`ExportError::Csv`]. Website fetch failures leave the website fields
    /// empty.
    pub async fn enrich(&self, records: &[ScrapedRecord]) -> Result<Vec<EnrichedRow>, ExportError> {
        let selected: Vec<&ScrapedRecord> = records
            .iter()
            .filter(|r| r.has_social_media())
            .take(self.options.limit)
            .collect();

        if selected.len() < self.options.limit {
            tracing::warn!(
                found = selected.len(),
                requested = self.options.limit,
                "fewer records with social media than requested"
            );
        }

        let total = selected.len();
        let mut rows = Vec::with_capacity(total);
        for (i, record) in selected.into_iter().enumerate() {
            if i > 0 {
                self.pause().await;
            }
            tracing::info!(
                index = i + 1,
                total,
                subdomain = %record.subdomain,
                "enriching record"
            );
            rows.push(self.enrich_record(record).await);
        }

        if rows.is_empty() {
            tracing::warn!(path = %self.options.sink_path.display(), "no records to enrich");
            return Ok(rows);
        }

        write_rows(&self.options.sink_path, &rows)?;
        tracing::info!(
            path = %self.options.sink_path.display(),
            records = rows.len(),
            "enriched contacts saved"
        );
        Ok(rows)
    }

    /// Builds one enriched row. Never fails.
    pub async fn enrich_record(&self, record: &ScrapedRecord) -> EnrichedRow {
        let facebook = record.social(SocialPlatform::Facebook);
        let instagram = record.social(SocialPlatform::Instagram);
        let twitter = record.social(SocialPlatform::Twitter);

        let mut row = EnrichedRow {
            subdomain: record.subdomain.clone(),
            url: record.url.clone(),
            original_email: record.email.clone(),
            original_phone: record.phone.clone(),
            company_address: record.company_address.clone(),
            website: record.website.clone(),
            facebook_url: facebook.to_owned(),
            instagram_url: instagram.to_owned(),
            twitter_url: twitter.to_owned(),
            ..EnrichedRow::default()
        };

        if !facebook.is_empty() {
            row.apply_facebook(facebook_profile(facebook));
        }
        if !instagram.is_empty() {
            row.apply_instagram(instagram_profile(instagram));
        }
        if !twitter.is_empty() {
            row.apply_twitter(twitter_profile(twitter));
        }
        if !record.website.is_empty() {
            match self.website_profile(&record.website).await {
                Ok(profile) => row.apply_website(profile),
                Err(e) => {
                    tracing::debug!(website = %record.website, error = %e, "website enrichment failed");
                }
            }
        }

        row
    }

    async fn website_profile(&self, website: &str) -> Result<WebsiteProfile, ExportError> {
        let url = self.client.url_for(website);
        let html = self.client.fetch_page(&url).await?;
        Ok(WebsiteProfile::from_html(&html))
    }

    async fn pause(&self) {
        let min = self.options.pause_min_ms;
        let max = self.options.pause_max_ms.max(min);
        if max == 0 {
            return;
        }
        let delay_ms = rand::rng().random_range(min..=max);
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }
}
