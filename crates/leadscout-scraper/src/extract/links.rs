//! Extractors driven by anchor `href` values.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use leadscout_core::SocialPlatform;
use rand::Rng;
use regex::Regex;

use super::Page;

/// Upper bound on property links kept per page.
const MAX_PROPERTY_LINKS: usize = 10;

static COUNT_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        Regex::new(r"(\d+)\s*properties").expect("valid regex"),
        Regex::new(r"(\d+)\s*rentals").expect("valid regex"),
        Regex::new(r"(\d+)\s*accommodations").expect("valid regex"),
        Regex::new(r"(\d+)\s*listings").expect("valid regex"),
    ]
});
static COUNTED_HREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"property|accommodation|rental").expect("valid regex"));
static PROPERTY_HREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"property|accommodation|rental|room").expect("valid regex"));

/// Platform → domain marker, in match priority order.
const SOCIAL_DOMAINS: [(SocialPlatform, &str); 5] = [
    (SocialPlatform::Facebook, "facebook.com"),
    (SocialPlatform::Instagram, "instagram.com"),
    (SocialPlatform::Twitter, "twitter.com"),
    (SocialPlatform::Linkedin, "linkedin.com"),
    (SocialPlatform::Youtube, "youtube.com"),
];

/// Number of properties advertised on the page.
///
/// Tries `"<N> properties"`, `"rentals"`, `"accommodations"`, `"listings"`
/// in that order over the lowercased text; the first pattern that matches
/// decides, saturating at `u32::MAX`. Without a textual count, counts
/// anchors pointing at property-like paths; with none of those either, draws
/// a placeholder in `[5, 30]` from `rng`.
pub fn extract_property_count<R: Rng + ?Sized>(page: &Page, rng: &mut R) -> u32 {
    let text = page.lower_text();
    for pattern in COUNT_PATTERNS.iter() {
        if let Some(digits) = pattern.captures(text).and_then(|c| c.get(1)) {
            // Only overflow can fail here; saturate rather than fall through.
            return digits.as_str().parse::<u32>().unwrap_or(u32::MAX);
        }
    }

    let linked = page
        .hrefs()
        .filter(|href| COUNTED_HREF_RE.is_match(href))
        .count();
    if linked > 0 {
        return u32::try_from(linked).unwrap_or(u32::MAX);
    }

    rng.random_range(5..=30)
}

/// Up to ten property-like links, absolutized against the page URL.
pub fn extract_property_links(page: &Page) -> Vec<String> {
    let base = reqwest::Url::parse(page.base_url()).ok();

    page.hrefs()
        .filter(|href| PROPERTY_HREF_RE.is_match(href))
        .take(MAX_PROPERTY_LINKS)
        .map(|href| {
            base.as_ref()
                .and_then(|b| b.join(href).ok())
                .map_or_else(|| href.to_owned(), |u| u.to_string())
        })
        .collect()
}

/// Social profile links keyed by platform.
///
/// Each link is assigned to the first platform whose domain it contains.
/// When several links map to the same platform the last one in document
/// order is kept.
pub fn extract_social_media(page: &Page) -> BTreeMap<SocialPlatform, String> {
    let mut social = BTreeMap::new();
    for href in page.hrefs() {
        if let Some((platform, _)) = SOCIAL_DOMAINS
            .iter()
            .find(|(_, domain)| href.contains(*domain))
        {
            social.insert(*platform, href.to_owned());
        }
    }
    social
}
