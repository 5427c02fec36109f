//! Post-processing stages over a scraped dataset: flat CSV export, country
//! categorization and contact enrichment.

pub mod country;
pub mod csv_export;
pub mod enrich;
pub mod error;
pub mod load;

pub use country::{categorize, detect_country, export_by_country, CountryRow};
pub use csv_export::{export_csv, LeadRow};
pub use enrich::{EnrichOptions, EnrichedRow, Enricher};
pub use error::ExportError;
pub use load::load_records;
