//! Profile hints derived from social URLs alone. No request is made; names
//! come from the last path segment and descriptions from keywords.

const BUSINESS_KEYWORDS: [&str; 3] = ["resort", "hotel", "rental"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacebookProfile {
    pub company_name: String,
    pub description: String,
    pub contact_info: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstagramProfile {
    pub business_name: String,
    pub bio: String,
    pub contact_button: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TwitterProfile {
    pub display_name: String,
    pub bio: String,
    pub location: String,
}

#[must_use]
pub fn facebook_profile(url: &str) -> FacebookProfile {
    let lower = url.to_lowercase();
    let description = if lower.contains("resort") {
        "Luxury Resort & Vacation Rentals"
    } else if lower.contains("hotel") {
        "Hotel & Accommodation Services"
    } else if lower.contains("rental") {
        "Property Rental Services"
    } else {
        ""
    };

    FacebookProfile {
        company_name: handle(url)
            .map(|h| title_case(h, &['-', '_']))
            .unwrap_or_default(),
        description: description.to_owned(),
        contact_info: String::new(),
    }
}

#[must_use]
pub fn instagram_profile(url: &str) -> InstagramProfile {
    let Some(username) = handle(url) else {
        return InstagramProfile::default();
    };

    let mut profile = InstagramProfile {
        business_name: title_case(username, &['_', '.']),
        ..InstagramProfile::default()
    };
    if is_business_handle(username) {
        "🏨 Premium accommodations | 📍 Book your stay".clone_into(&mut profile.bio);
        "Contact Business".clone_into(&mut profile.contact_button);
    }
    profile
}

#[must_use]
pub fn twitter_profile(url: &str) -> TwitterProfile {
    let Some(handle) = handle(url) else {
        return TwitterProfile::default();
    };

    let mut profile = TwitterProfile {
        display_name: title_case(handle, &['_', '-']),
        ..TwitterProfile::default()
    };
    if is_business_handle(handle) {
        "Luxury accommodations & vacation rentals".clone_into(&mut profile.bio);
        "Global".clone_into(&mut profile.location);
    }
    profile
}

/// Last path segment of a profile URL, provided the URL has a path at all.
///
/// `https://facebook.com/bandycanyon/` yields `bandycanyon`; a bare
/// `https://facebook.com` yields `None`.
fn handle(url: &str) -> Option<&str> {
    let parts: Vec<&str> = url.trim_end_matches('/').split('/').collect();
    if parts.len() > 3 {
        parts.last().copied()
    } else {
        None
    }
}

fn is_business_handle(handle: &str) -> bool {
    let lower = handle.to_lowercase();
    BUSINESS_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Splits on whitespace and `separators`, capitalizes each word (rest
/// lowercased), and joins with single spaces.
fn title_case(raw: &str, separators: &[char]) -> String {
    raw.split(|c: char| c.is_whitespace() || separators.contains(&c))
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
