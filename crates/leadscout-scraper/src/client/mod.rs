//! HTTP client adapter for platform subdomain pages.

mod origin;
mod verify;

use std::time::Duration;

use leadscout_core::{AppConfig, Scheme};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{redirect, Client, StatusCode, Url};

use crate::error::ScraperError;

pub use origin::{first_label, normalize_host, target_url};
pub use verify::Verification;

/// Maximum redirect hops followed before the response is taken as final.
const MAX_REDIRECTS: usize = 10;

/// Shared, immutable HTTP client for verification and page fetches.
///
/// Built once per run and handed to every worker by reference; nothing in it
/// is mutated after construction, so no locking is needed.
pub struct PortalClient {
    pub(super) client: Client,
    pub(super) scheme: Scheme,
    pub(super) root_domain: String,
    pub(super) verify_timeout: Duration,
    pub(super) fetch_timeout: Duration,
}

impl PortalClient {
    /// Creates a `PortalClient` with browser-like default headers.
    ///
    /// `verify_timeout` bounds HEAD checks, `fetch_timeout` bounds page GETs.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ScraperError::InvalidHeader`] if the user
    /// agent is not a valid header value.
    pub fn new(
        user_agent: &str,
        scheme: Scheme,
        root_domain: &str,
        verify_timeout: Duration,
        fetch_timeout: Duration,
    ) -> Result<Self, ScraperError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            HeaderValue::from_static("en-US,en;q=0.5"),
        );
        headers.insert(
            reqwest::header::UPGRADE_INSECURE_REQUESTS,
            HeaderValue::from_static("1"),
        );

        let user_agent =
            HeaderValue::from_str(user_agent).map_err(|e| ScraperError::InvalidHeader {
                name: "user-agent",
                reason: e.to_string(),
            })?;

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .connect_timeout(fetch_timeout)
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;

        Ok(Self {
            client,
            scheme,
            root_domain: root_domain.to_owned(),
            verify_timeout,
            fetch_timeout,
        })
    }

    /// Builds a client from the loaded application config.
    ///
    /// # Errors
    ///
    /// See [`PortalClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        Self::new(
            &config.user_agent,
            config.scheme,
            &config.root_domain,
            config.verify_timeout(),
            config.fetch_timeout(),
        )
    }

    #[must_use]
    pub fn root_domain(&self) -> &str {
        &self.root_domain
    }

    #[must_use]
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Request URL for a target: the target itself when it already carries
    /// an `http(s)://` scheme, otherwise `<scheme>://<target>`.
    #[must_use]
    pub fn url_for(&self, target: &str) -> String {
        target_url(target, self.scheme)
    }

    /// Issues a HEAD request and returns the final status after redirects.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidUrl`] if `url` does not parse and
    /// [`ScraperError::Http`] on timeout, DNS, connection or TLS failure.
    pub async fn head_status(&self, url: &str) -> Result<StatusCode, ScraperError> {
        let response = self
            .client
            .head(parse_url(url)?)
            .timeout(self.verify_timeout)
            .send()
            .await?;
        Ok(response.status())
    }

    /// Fetches a page body with GET.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidUrl`] if `url` does not parse.
    /// - [`ScraperError::UnexpectedStatus`] for any final status other than 200.
    /// - [`ScraperError::Http`] on transport failure or a body read error.
    pub async fn fetch_page(&self, url: &str) -> Result<String, ScraperError> {
        let response = self
            .client
            .get(parse_url(url)?)
            .timeout(self.fetch_timeout)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }
}

fn parse_url(url: &str) -> Result<Url, ScraperError> {
    Url::parse(url).map_err(|e| ScraperError::InvalidUrl {
        url: url.to_owned(),
        reason: e.to_string(),
    })
}
