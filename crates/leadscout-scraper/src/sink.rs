//! Flat-file JSON sinks.

use std::path::Path;

use serde::Serialize;

use crate::error::ScraperError;

/// Writes `value` as pretty-printed UTF-8 JSON, creating parent directories.
///
/// Non-ASCII text is written verbatim, not `\u` escaped.
///
/// # Errors
///
/// Returns [`ScraperError::Serialize`] if `value` cannot be serialized and
/// [`ScraperError::Io`] if the directory or file cannot be written.
pub async fn write_json<T>(path: &Path, value: &T) -> Result<(), ScraperError>
where
    T: Serialize + ?Sized,
{
    let body = serde_json::to_string_pretty(value).map_err(|e| ScraperError::Serialize {
        context: path.display().to_string(),
        source: e,
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| ScraperError::Io {
                path: parent.display().to_string(),
                source: e,
            })?;
    }

    tokio::fs::write(path, body)
        .await
        .map_err(|e| ScraperError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

    tracing::debug!(path = %path.display(), "wrote JSON sink");
    Ok(())
}
