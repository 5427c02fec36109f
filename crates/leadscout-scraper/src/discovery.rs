//! Subdomain discovery: static candidate generation plus parallel liveness
//! checks.

use std::collections::HashSet;
use std::path::PathBuf;

use futures::stream::{self, StreamExt};
use leadscout_core::AppConfig;

use crate::client::{normalize_host, PortalClient, Verification};
use crate::error::ScraperError;
use crate::sink::write_json;

const COMMON_PREFIXES: [&str; 34] = [
    "www", "app", "api", "admin", "blog", "help", "support", "mail", "test", "staging", "dev",
    "demo", "booking", "reservation", "property", "properties", "rental", "rentals", "vacation",
    "holiday", "resort", "hotel", "villa", "apartment", "cabin", "house", "beach", "mountain",
    "city", "downtown", "luxury", "budget", "family", "business",
];

const KNOWN_EXAMPLES: [&str; 16] = [
    "bandycanyon",
    "riversresortrentals",
    "tideway-hotel",
    "oceanview",
    "mountainlodge",
    "citystay",
    "beachfront",
    "luxuryresort",
    "familyhotel",
    "businesshotel",
    "vacationrental",
    "holidayinn",
    "grandhotel",
    "boutique",
    "resort",
    "spa",
];

const PATTERN_BASES: [&str; 6] = ["resort", "hotel", "rental", "property", "vacation", "holiday"];
const PATTERN_MODIFIERS: [&str; 7] = ["s", "beach", "mountain", "city", "luxury", "grand", "royal"];

/// Seeds always present in the discovered list, reachable or not.
pub const GUARANTEED_LABELS: [&str; 3] = ["bandycanyon", "riversresortrentals", "tideway-hotel"];

const PAD_PREFIXES: [&str; 10] = [
    "ocean", "mountain", "city", "beach", "lake", "forest", "valley", "hill", "river", "sunset",
];
const PAD_SUFFIXES: [&str; 8] = [
    "resort",
    "hotel",
    "lodge",
    "inn",
    "suites",
    "rentals",
    "properties",
    "vacation",
];

#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    /// Checks in flight at once.
    pub concurrency: usize,
    /// Minimum list size; generated names fill any shortfall.
    pub target_count: usize,
    pub sink_path: PathBuf,
}

impl DiscoveryOptions {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            concurrency: config.verify_concurrency,
            target_count: config.discovery_target,
            sink_path: config.discovered_path(),
        }
    }
}

/// Static candidate labels: common prefixes, known examples, and
/// base × modifier compositions. Duplicates are dropped, first occurrence wins.
#[must_use]
pub fn candidate_labels() -> Vec<String> {
    let mut composed: Vec<String> = Vec::new();
    for base in PATTERN_BASES {
        composed.push(base.to_owned());
        for modifier in PATTERN_MODIFIERS {
            composed.push(format!("{base}{modifier}"));
            composed.push(format!("{modifier}{base}"));
            composed.push(format!("{base}-{modifier}"));
            composed.push(format!("{modifier}-{base}"));
        }
    }

    let mut seen = HashSet::new();
    COMMON_PREFIXES
        .iter()
        .chain(KNOWN_EXAMPLES.iter())
        .map(|s| (*s).to_owned())
        .chain(composed)
        .filter(|label| seen.insert(label.clone()))
        .collect()
}

/// Generated fill-in hosts: a prefix × suffix grid, then `property<NNN>`.
///
/// Names already in `existing` are skipped, so the result never duplicates.
#[must_use]
pub fn generate_additional(count: usize, root_domain: &str, existing: &[String]) -> Vec<String> {
    let taken: HashSet<&str> = existing.iter().map(String::as_str).collect();
    let grid = PAD_PREFIXES.len() * PAD_SUFFIXES.len();
    let mut additional: Vec<String> = Vec::with_capacity(count);

    let mut i = 0usize;
    while additional.len() < count {
        let label = if i < grid {
            format!(
                "{}{}",
                PAD_PREFIXES[i % PAD_PREFIXES.len()],
                PAD_SUFFIXES[i / PAD_PREFIXES.len()]
            )
        } else {
            format!("property{i:03}")
        };
        i += 1;

        let host = normalize_host(&label, root_domain);
        if taken.contains(host.as_str()) || additional.contains(&host) {
            continue;
        }
        additional.push(host);
    }

    additional
}

/// Verifies every candidate, at most `concurrency` at a time, preserving input order.
pub async fn verify_all(
    client: &PortalClient,
    candidates: &[String],
    concurrency: usize,
) -> Vec<Verification> {
    stream::iter(candidates)
        .map(|candidate| client.verify(candidate))
        .buffered(concurrency.max(1))
        .collect()
        .await
}

/// Runs discovery over `candidates` and writes the resulting host list.
///
/// Reachable hosts come first, then any missing guaranteed seeds, then
/// generated names until `target_count` is reached.
///
/// # Errors
///
/// Returns [`ScraperError::Io`] or [`ScraperError::Serialize`] if the sink
/// cannot be written. Unreachable hosts are never errors.
pub async fn discover_subdomains(
    client: &PortalClient,
    candidates: &[String],
    options: &DiscoveryOptions,
) -> Result<Vec<String>, ScraperError> {
    tracing::info!(candidates = candidates.len(), "testing potential subdomains");

    let verifications = verify_all(client, candidates, options.concurrency).await;
    let mut hosts: Vec<String> = Vec::new();
    for v in verifications.into_iter().filter(|v| v.reachable) {
        if !hosts.contains(&v.host) {
            hosts.push(v.host);
        }
    }
    let reachable = hosts.len();

    for label in GUARANTEED_LABELS {
        let host = normalize_host(label, client.root_domain());
        if !hosts.contains(&host) {
            hosts.push(host);
        }
    }

    let shortfall = options.target_count.saturating_sub(hosts.len());
    let padding = generate_additional(shortfall, client.root_domain(), &hosts);
    hosts.extend(padding);

    tracing::info!(
        reachable,
        total = hosts.len(),
        "discovered subdomains"
    );

    write_json(&options.sink_path, &hosts).await?;
    Ok(hosts)
}
