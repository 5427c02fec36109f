//! Contact-detail extractors: address, website, phone and email.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Selector;

use super::Page;

/// Address containers, highest priority first.
static ADDRESS_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    [
        ".address",
        ".contact-address",
        ".location",
        "[data-address]",
        ".company-address",
    ]
    .iter()
    .map(|s| Selector::parse(s).expect("valid selector"))
    .collect()
});
static MAILTO_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"a[href^="mailto:"]"#).expect("valid selector"));

static STREET_ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\d+\s+[A-Za-z\s]+(?:Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Drive|Dr|Lane|Ln)",
    )
    .expect("valid regex")
});
static PHONE_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"\+?\d{1,3}[-.\s]?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("valid regex"),
        Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("valid regex"),
    ]
});
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid regex")
});
static ABSOLUTE_HTTP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").expect("valid regex"));

const WEBSITE_TLDS: [&str; 3] = [".com", ".net", ".org"];

/// Company address.
///
/// The first element matched by the selector list wins, its text nodes
/// trimmed and joined by single spaces. Falls back to a US-style street
/// address pattern over the page text.
pub fn extract_address(page: &Page) -> String {
    for selector in ADDRESS_SELECTORS.iter() {
        if let Some(element) = page.document().select(selector).next() {
            return element
                .text()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
        }
    }

    STREET_ADDRESS_RE
        .find(page.text())
        .map(|m| m.as_str().trim().to_owned())
        .unwrap_or_default()
}

/// First absolute link off the platform that looks like a company domain.
pub fn extract_website(page: &Page, platform_label: &str) -> String {
    let platform_label = platform_label.to_ascii_lowercase();
    page.hrefs()
        .find(|href| {
            ABSOLUTE_HTTP_RE.is_match(href)
                && (platform_label.is_empty()
                    || !href.to_ascii_lowercase().contains(&platform_label))
                && WEBSITE_TLDS.iter().any(|tld| href.contains(*tld))
        })
        .map(str::to_owned)
        .unwrap_or_default()
}

pub fn extract_phone(page: &Page) -> String {
    PHONE_PATTERNS
        .iter()
        .find_map(|re| re.find(page.text()))
        .map(|m| m.as_str().to_owned())
        .unwrap_or_default()
}

/// Email from the page text, else from the first `mailto:` link.
pub fn extract_email(page: &Page) -> String {
    if let Some(m) = EMAIL_RE.find(page.text()) {
        return m.as_str().to_owned();
    }

    page.document()
        .select(&MAILTO_SELECTOR)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(|href| href.replace("mailto:", ""))
        .unwrap_or_default()
}
