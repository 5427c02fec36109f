use leadscout_core::AdditionalInfo;

use super::Page;

const AMENITY_KEYWORDS: [&str; 8] = [
    "pool", "wifi", "parking", "kitchen", "gym", "spa", "beach", "pet",
];

const CANCELLATION_NOTE: &str = "Cancellation policy available";

/// Amenity keywords and policy flags found in the page text.
///
/// Keys stay unset when nothing is found, so an empty page yields an empty map.
pub fn extract_additional_info(page: &Page) -> AdditionalInfo {
    let text = page.lower_text();

    let amenities: Vec<String> = AMENITY_KEYWORDS
        .iter()
        .filter(|kw| text.contains(**kw))
        .map(|kw| (*kw).to_owned())
        .collect();

    AdditionalInfo {
        amenities: (!amenities.is_empty()).then_some(amenities),
        cancellation_policy: text
            .contains("cancellation")
            .then(|| CANCELLATION_NOTE.to_owned()),
        check_in_available: (text.contains("check-in") || text.contains("check in"))
            .then_some(true),
        ..AdditionalInfo::default()
    }
}
