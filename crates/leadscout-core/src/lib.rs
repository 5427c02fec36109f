mod app_config;
mod config;
pub mod records;

pub use app_config::{AppConfig, Scheme};
pub use config::{load_app_config, load_app_config_from_env};
pub use records::{AdditionalInfo, DataSource, ScrapedRecord, SocialPlatform};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
