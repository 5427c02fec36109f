//! Country categorization from free-text company addresses.
//!
//! Detection is pattern-based: each country owns an ordered list of regexes
//! matched against the uppercased address, countries are tried in table
//! order, and the first hit wins. Postal-code shapes overlap between
//! countries (a five-digit code followed by a word fits Germany, France,
//! Spain and Italy), so table order decides those ties.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use leadscout_core::{ScrapedRecord, SocialPlatform};
use regex::Regex;
use serde::Serialize;

use crate::csv_export::write_rows;
use crate::error::ExportError;

pub const UNKNOWN_COUNTRY: &str = "Unknown";

const COUNTRY_PATTERNS: &[(&str, &[&str])] = &[
    (
        "United States",
        &[r"USA", r"US\b", r"UNITED STATES", r"\bSTATE\s+\d{5}", r"[A-Z]{2}\s+\d{5}"],
    ),
    ("Canada", &[r"CANADA", r"CA\b", r"[A-Z]\d[A-Z]\s*\d[A-Z]\d"]),
    (
        "United Kingdom",
        &[
            r"UK\b",
            r"UNITED KINGDOM",
            r"ENGLAND",
            r"SCOTLAND",
            r"WALES",
            r"[A-Z]{1,2}\d{1,2}[A-Z]?\s*\d[A-Z]{2}",
        ],
    ),
    (
        "Australia",
        &[
            r"AUSTRALIA", r"AU\b", r"NSW", r"VIC", r"QLD", r"SA", r"WA", r"TAS", r"NT", r"ACT",
        ],
    ),
    ("Germany", &[r"GERMANY", r"DE\b", r"DEUTSCHLAND", r"\d{5}\s+[A-Z]"]),
    ("France", &[r"FRANCE", r"FR\b", r"\d{5}\s+[A-Z]"]),
    ("Spain", &[r"SPAIN", r"ES\b", r"ESPAÑA", r"\d{5}\s+[A-Z]"]),
    ("Italy", &[r"ITALY", r"IT\b", r"ITALIA", r"\d{5}\s+[A-Z]"]),
    ("Netherlands", &[r"NETHERLANDS", r"NL\b", r"HOLLAND", r"\d{4}\s*[A-Z]{2}"]),
    ("Brazil", &[r"BRAZIL", r"BR\b", r"BRASIL", r"\d{5}-?\d{3}"]),
    ("Mexico", &[r"MEXICO", r"MX\b", r"MÉXICO", r"C\.P\.\s*\d{5}"]),
];

static COUNTRY_REGEXES: LazyLock<Vec<(&'static str, Vec<Regex>)>> = LazyLock::new(|| {
    COUNTRY_PATTERNS
        .iter()
        .map(|(country, patterns)| {
            let compiled = patterns
                .iter()
                .map(|p| Regex::new(p).expect("valid regex"))
                .collect();
            (*country, compiled)
        })
        .collect()
});

/// Returns the first country whose patterns match `address`, or `"Unknown"`.
#[must_use]
pub fn detect_country(address: &str) -> &'static str {
    let address = address.trim();
    if address.is_empty() {
        return UNKNOWN_COUNTRY;
    }

    let upper = address.to_uppercase();
    COUNTRY_REGEXES
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|re| re.is_match(&upper)))
        .map_or(UNKNOWN_COUNTRY, |(country, _)| *country)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryRow {
    pub country: &'static str,
    pub subdomain: String,
    pub url: String,
    pub property_count: u32,
    pub company_address: String,
    pub website: String,
    pub phone: String,
    pub email: String,
    pub property_links_count: usize,
    pub social_media_facebook: String,
    pub social_media_instagram: String,
    pub social_media_twitter: String,
}

/// Tags every record with a country and sorts by country name.
///
/// The sort is stable: records of the same country keep dataset order.
#[must_use]
pub fn categorize(records: &[ScrapedRecord]) -> Vec<CountryRow> {
    let mut rows: Vec<CountryRow> = records
        .iter()
        .map(|record| {
            let address = record.company_address.trim();
            CountryRow {
                country: detect_country(address),
                subdomain: record.subdomain.clone(),
                url: record.url.clone(),
                property_count: record.property_count,
                company_address: address.to_owned(),
                website: record.website.clone(),
                phone: record.phone.clone(),
                email: record.email.clone(),
                property_links_count: record.property_links.len(),
                social_media_facebook: record.social(SocialPlatform::Facebook).to_owned(),
                social_media_instagram: record.social(SocialPlatform::Instagram).to_owned(),
                social_media_twitter: record.social(SocialPlatform::Twitter).to_owned(),
            }
        })
        .collect();
    rows.sort_by(|a, b| a.country.cmp(b.country));
    rows
}

/// Writes the categorized CSV and returns per-country record counts.
///
/// # Errors
///
/// Returns [`ExportError::Io`] or [`ExportError::Csv`] if the file cannot be
/// written.
pub fn export_by_country(
    records: &[ScrapedRecord],
    path: &Path,
) -> Result<BTreeMap<&'static str, usize>, ExportError> {
    if records.is_empty() {
        tracing::warn!(path = %path.display(), "no records to categorize");
        return Ok(BTreeMap::new());
    }

    let rows = categorize(records);
    write_rows(path, &rows)?;

    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    for row in &rows {
        *counts.entry(row.country).or_default() += 1;
    }
    for (country, count) in &counts {
        tracing::info!(country, records = count, "categorized");
    }
    tracing::info!(path = %path.display(), "categorized CSV saved");

    Ok(counts)
}

#[cfg(test)]
#[path = "country_test.rs"]
mod tests;
