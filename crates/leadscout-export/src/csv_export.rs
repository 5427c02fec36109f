//! Flat CSV rendition of the scraped dataset.

use std::path::Path;

use leadscout_core::{ScrapedRecord, SocialPlatform};
use serde::Serialize;

use crate::error::ExportError;

/// One CSV row per record. Field order is column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadRow {
    pub subdomain: String,
    pub url: String,
    pub data_source: &'static str,
    pub property_count: u32,
    pub property_links_count: usize,
    pub property_links: String,
    pub company_address: String,
    pub website: String,
    pub phone: String,
    pub email: String,
    pub social_media_facebook: String,
    pub social_media_instagram: String,
    pub social_media_twitter: String,
    pub social_media_linkedin: String,
    pub social_media_youtube: String,
    pub amenities: String,
    pub has_cancellation_policy: bool,
    pub has_check_in_info: bool,
}

impl From<&ScrapedRecord> for LeadRow {
    fn from(record: &ScrapedRecord) -> Self {
        let info = &record.additional_info;
        Self {
            subdomain: record.subdomain.clone(),
            url: record.url.clone(),
            data_source: record.data_source.as_str(),
            property_count: record.property_count,
            property_links_count: record.property_links.len(),
            property_links: record.property_links.join("; "),
            company_address: record.company_address.clone(),
            website: record.website.clone(),
            phone: record.phone.clone(),
            email: record.email.clone(),
            social_media_facebook: record.social(SocialPlatform::Facebook).to_owned(),
            social_media_instagram: record.social(SocialPlatform::Instagram).to_owned(),
            social_media_twitter: record.social(SocialPlatform::Twitter).to_owned(),
            social_media_linkedin: record.social(SocialPlatform::Linkedin).to_owned(),
            social_media_youtube: record.social(SocialPlatform::Youtube).to_owned(),
            amenities: info.amenities().join("; "),
            has_cancellation_policy: info.has_cancellation_policy(),
            has_check_in_info: info.has_check_in_info(),
        }
    }
}

/// Writes `records` as `scraped_data.csv`-style rows and returns the row count.
///
/// An empty dataset is logged and leaves no file behind.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the parent directory cannot be created and
/// [`ExportError::Csv`] on any write failure.
pub fn export_csv(records: &[ScrapedRecord], path: &Path) -> Result<usize, ExportError> {
    if records.is_empty() {
        tracing::warn!(path = %path.display(), "no records to export");
        return Ok(0);
    }

    let rows: Vec<LeadRow> = records.iter().map(LeadRow::from).collect();
    write_rows(path, &rows)?;

    tracing::info!(path = %path.display(), records = rows.len(), "CSV created");
    Ok(rows.len())
}

/// Serializes `rows` with a header line taken from the row type's fields.
pub(crate) fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ExportError::Io {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let csv_err = |e: csv::Error| ExportError::Csv {
        path: path.display().to_string(),
        source: e,
    };

    let mut wtr = csv::Writer::from_path(path).map_err(csv_err)?;
    for row in rows {
        wtr.serialize(row).map_err(csv_err)?;
    }
    wtr.flush().map_err(|e| ExportError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(())
}
