//! Liveness check for candidate subdomains.

use reqwest::StatusCode;

use super::{normalize_host, PortalClient};

/// Result of probing one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    /// Fully-qualified host, root domain appended when it was missing.
    pub host: String,
    pub reachable: bool,
}

impl PortalClient {
    /// Checks a candidate with a HEAD request.
    ///
    /// The candidate is qualified with the root domain first. Reachable iff the
    /// final status (after redirects) is exactly 200. Transport failures of any
    /// kind (timeout, DNS, refused connection, TLS) count as unreachable and
    /// are never returned to the caller.
    pub async fn verify(&self, candidate: &str) -> Verification {
        let host = normalize_host(candidate, &self.root_domain);
        let url = self.url_for(&host);

        let reachable = match self.head_status(&url).await {
            Ok(StatusCode::OK) => {
                tracing::info!(host = %host, "subdomain found");
                true
            }
            Ok(status) => {
                tracing::debug!(host = %host, status = status.as_u16(), "subdomain not reachable");
                false
            }
            Err(e) => {
                tracing::debug!(host = %host, error = %e, "subdomain check failed");
                false
            }
        };

        Verification { host, reachable }
    }
}
