pub mod client;
pub mod discovery;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod pipeline;
pub mod sink;

pub use client::{PortalClient, Verification};
pub use discovery::{discover_subdomains, DiscoveryOptions};
pub use error::ScraperError;
pub use extract::extract_record;
pub use fallback::synthesize;
pub use pipeline::{ScrapeOptions, Scraper};
