//! Host and URL normalization for platform targets.

use leadscout_core::Scheme;

/// Qualifies a candidate label with the platform root domain.
///
/// `"bandycanyon"` becomes `"bandycanyon.lodgify.com"`; a candidate that is
/// already the root domain or ends with `".<root>"` is returned as-is
/// (lowercased, without a trailing dot).
#[must_use]
pub fn normalize_host(candidate: &str, root_domain: &str) -> String {
    let host = candidate.trim().trim_end_matches('.').to_ascii_lowercase();
    let root = root_domain.trim_start_matches('.').to_ascii_lowercase();

    if host == root || host.ends_with(&format!(".{root}")) {
        host
    } else {
        format!("{host}.{root}")
    }
}

/// Builds the request URL for a target.
#[must_use]
pub fn target_url(target: &str, scheme: Scheme) -> String {
    let target = target.trim();
    if has_http_scheme(target) {
        target.to_owned()
    } else {
        format!("{scheme}://{target}")
    }
}

/// First dot-separated label of an identifier, ignoring any URL scheme.
///
/// `"https://oceanlodge.lodgify.com/about"` yields `"oceanlodge"`.
#[must_use]
pub fn first_label(identifier: &str) -> &str {
    let trimmed = identifier.trim();
    let without_scheme = trimmed
        .split_once("://")
        .map_or(trimmed, |(_, rest)| rest);
    without_scheme
        .split(['.', '/', ':'])
        .next()
        .unwrap_or(without_scheme)
}

fn has_http_scheme(target: &str) -> bool {
    let lower = target.get(..8).unwrap_or(target).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_host_appends_root_domain() {
        assert_eq!(
            normalize_host("bandycanyon", "lodgify.com"),
            "bandycanyon.lodgify.com"
        );
    }

    #[test]
    fn normalize_host_keeps_qualified_host() {
        assert_eq!(
            normalize_host("Tideway-Hotel.lodgify.com.", "lodgify.com"),
            "tideway-hotel.lodgify.com"
        );
    }

    #[test]
    fn normalize_host_keeps_bare_root() {
        assert_eq!(normalize_host("lodgify.com", "lodgify.com"), "lodgify.com");
    }

    #[test]
    fn normalize_host_does_not_match_suffix_without_dot() {
        assert_eq!(
            normalize_host("notlodgify.com", "lodgify.com"),
            "notlodgify.com.lodgify.com"
        );
    }

    #[test]
    fn target_url_prefixes_scheme() {
        assert_eq!(
            target_url("citystay.lodgify.com", Scheme::Https),
            "https://citystay.lodgify.com"
        );
        assert_eq!(
            target_url("127.0.0.1:8080", Scheme::Http),
            "http://127.0.0.1:8080"
        );
    }

    #[test]
    fn target_url_keeps_existing_scheme() {
        assert_eq!(
            target_url("HTTP://citystay.lodgify.com/a", Scheme::Https),
            "HTTP://citystay.lodgify.com/a"
        );
    }

    #[test]
    fn first_label_strips_scheme_and_path() {
        assert_eq!(first_label("https://oceanlodge.lodgify.com/about"), "oceanlodge");
        assert_eq!(first_label("bandycanyon.lodgify.com"), "bandycanyon");
        assert_eq!(first_label("villa"), "villa");
    }
}
