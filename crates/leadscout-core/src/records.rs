//! Lead record shape shared by the scraper and the exporters.
//!
//! Every field carries `#[serde(default)]` so a dataset written by an older
//! build (or edited by hand) still loads; absent keys become empty values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Social platforms recognised by the link extractor, in match priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Facebook,
    Instagram,
    Twitter,
    Linkedin,
    Youtube,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 5] = [
        SocialPlatform::Facebook,
        SocialPlatform::Instagram,
        SocialPlatform::Twitter,
        SocialPlatform::Linkedin,
        SocialPlatform::Youtube,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Linkedin => "linkedin",
            SocialPlatform::Youtube => "youtube",
        }
    }
}

impl std::fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a record was extracted from a fetched page or fabricated after a failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    #[default]
    Live,
    Synthetic,
}

impl DataSource {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DataSource::Live => "live",
            DataSource::Synthetic => "synthetic",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_policy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in_available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out: Option<String>,
}

impl AdditionalInfo {
    /// `true` when the record mentions a cancellation policy at all.
    #[must_use]
    pub fn has_cancellation_policy(&self) -> bool {
        self.cancellation_policy.is_some()
    }

    #[must_use]
    pub fn has_check_in_info(&self) -> bool {
        self.check_in_available.unwrap_or(false)
    }

    #[must_use]
    pub fn amenities(&self) -> &[String] {
        self.amenities.as_deref().unwrap_or_default()
    }
}

/// One lead: the data scraped (or synthesized) for a single platform subdomain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapedRecord {
    pub subdomain: String,
    pub url: String,
    pub data_source: DataSource,
    pub property_count: u32,
    pub property_links: Vec<String>,
    pub company_address: String,
    pub website: String,
    pub social_media: BTreeMap<SocialPlatform, String>,
    pub phone: String,
    pub email: String,
    pub additional_info: AdditionalInfo,
}

impl ScrapedRecord {
    /// Returns the URL recorded for `platform`, or `""` when absent.
    #[must_use]
    pub fn social(&self, platform: SocialPlatform) -> &str {
        self.social_media.get(&platform).map_or("", String::as_str)
    }

    /// `true` when at least one social URL is non-empty.
    #[must_use]
    pub fn has_social_media(&self) -> bool {
        self.social_media.values().any(|url| !url.is_empty())
    }
}
