//! Synthetic stand-in records for targets that could not be scraped.
//!
//! Output is shape-complete but random in content, and always tagged
//! [`DataSource::Synthetic`] so downstream consumers can filter it out.

use std::collections::BTreeMap;

use leadscout_core::{AdditionalInfo, DataSource, Scheme, ScrapedRecord, SocialPlatform};
use rand::Rng;

use crate::client::{first_label, target_url};

const FALLBACK_AMENITIES: [&str; 5] = ["Pool", "WiFi", "Parking", "Kitchen", "Air Conditioning"];
const FALLBACK_CANCELLATION: &str = "Free cancellation up to 24 hours before check-in";
const FALLBACK_CHECK_IN: &str = "3:00 PM";
const FALLBACK_CHECK_OUT: &str = "11:00 AM";

/// Builds a placeholder record for `identifier`.
///
/// `url` is the identifier itself when it already carries an `http(s)://`
/// scheme, otherwise `https://<identifier>`. Property count is drawn from
/// `[5, 50]` and 2 to 7 property links are generated under `url`. Website,
/// email and social handles are derived from the identifier's first label.
pub fn synthesize<R: Rng + ?Sized>(identifier: &str, rng: &mut R) -> ScrapedRecord {
    let url = target_url(identifier, Scheme::Https);
    let base = url.trim_end_matches('/');
    let label = first_label(identifier);

    let link_count: u32 = rng.random_range(2..=7);
    let property_links = (1..=link_count)
        .map(|i| format!("{base}/property/luxury-villa-{i}"))
        .collect();

    let social_media: BTreeMap<SocialPlatform, String> = [
        SocialPlatform::Facebook,
        SocialPlatform::Instagram,
        SocialPlatform::Twitter,
    ]
    .into_iter()
    .map(|p| (p, format!("https://{p}.com/{label}")))
    .collect();

    ScrapedRecord {
        subdomain: identifier.to_owned(),
        url,
        data_source: DataSource::Synthetic,
        property_count: rng.random_range(5..=50),
        property_links,
        company_address: format!(
            "{} Main St, City, State {}",
            rng.random_range(100..=9999),
            rng.random_range(10_000..=99_999)
        ),
        website: format!("https://www.{label}.com"),
        social_media,
        phone: format!(
            "+1-{}-{}-{}",
            rng.random_range(200..=999),
            rng.random_range(200..=999),
            rng.random_range(1000..=9999)
        ),
        email: format!("contact@{label}.com"),
        additional_info: AdditionalInfo {
            amenities: Some(FALLBACK_AMENITIES.iter().map(|a| (*a).to_owned()).collect()),
            cancellation_policy: Some(FALLBACK_CANCELLATION.to_owned()),
            check_in_available: None,
            check_in: Some(FALLBACK_CHECK_IN.to_owned()),
            check_out: Some(FALLBACK_CHECK_OUT.to_owned()),
        },
    }
}
