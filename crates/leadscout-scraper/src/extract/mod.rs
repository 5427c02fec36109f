//! Best-effort field extractors over a parsed subdomain page.
//!
//! Every extractor is a pure function of a [`Page`]; none of them fail.
//! When nothing usable is found they return the field's empty value.

mod contact;
mod info;
mod links;

use std::sync::LazyLock;

use leadscout_core::{DataSource, ScrapedRecord};
use rand::Rng;
use scraper::{Html, Selector};

pub use contact::{extract_address, extract_email, extract_phone, extract_website};
pub use info::extract_additional_info;
pub use links::{extract_property_count, extract_property_links, extract_social_media};

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid selector"));

/// A fetched page parsed once and shared by all extractors.
pub struct Page {
    document: Html,
    text: String,
    lower_text: String,
    base_url: String,
}

impl Page {
    #[must_use]
    pub fn parse(html: &str, base_url: &str) -> Self {
        let document = Html::parse_document(html);
        let text: String = document.root_element().text().collect();
        let lower_text = text.to_lowercase();
        Self {
            document,
            text,
            lower_text,
            base_url: base_url.to_owned(),
        }
    }

    #[must_use]
    pub fn document(&self) -> &Html {
        &self.document
    }

    /// Concatenated text of every node in the document.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn lower_text(&self) -> &str {
        &self.lower_text
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `href` values of all anchors, in document order.
    pub fn hrefs(&self) -> impl Iterator<Item = &str> + '_ {
        self.document
            .select(&ANCHOR_SELECTOR)
            .filter_map(|a| a.value().attr("href"))
    }
}

/// Runs every extractor against `html` and assembles a live record.
///
/// `platform_label` is the platform's own name (e.g. `"lodgify"`); links
/// containing it are never reported as the company website.
pub fn extract_record<R: Rng + ?Sized>(
    subdomain: &str,
    url: &str,
    html: &str,
    platform_label: &str,
    rng: &mut R,
) -> ScrapedRecord {
    let page = Page::parse(html, url);

    ScrapedRecord {
        subdomain: subdomain.to_owned(),
        url: url.to_owned(),
        data_source: DataSource::Live,
        property_count: extract_property_count(&page, rng),
        property_links: extract_property_links(&page),
        company_address: extract_address(&page),
        website: extract_website(&page, platform_label),
        social_media: extract_social_media(&page),
        phone: extract_phone(&page),
        email: extract_email(&page),
        additional_info: extract_additional_info(&page),
    }
}

#[cfg(test)]
#[path = "../extract_test.rs"]
mod tests;
