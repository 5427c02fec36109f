use std::path::Path;

use leadscout_core::ScrapedRecord;

use crate::error::ExportError;

/// Reads a dataset written by the scrape stage.
///
/// Keys missing from a record take their empty defaults; only unreadable
/// files and malformed JSON are errors.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the file cannot be read and
/// [`ExportError::Json`] if it is not a JSON array of records.
pub async fn load_records(path: &Path) -> Result<Vec<ScrapedRecord>, ExportError> {
    let body = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ExportError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

    let records: Vec<ScrapedRecord> =
        serde_json::from_str(&body).map_err(|e| ExportError::Json {
            path: path.display().to_string(),
            source: e,
        })?;

    tracing::info!(path = %path.display(), records = records.len(), "loaded dataset");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn loads_sparse_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scraped_data.json");
        std::fs::write(
            &path,
            r#"[{"subdomain": "a.lodgify.com"}, {"subdomain": "b.lodgify.com", "property_count": 4}]"#,
        )
        .unwrap();

        let records = load_records(&path).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].property_count, 4);
        assert!(records[0].email.is_empty());
    }

    #[tokio::test]
    async fn malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scraped_data.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_records(&path).await.unwrap_err();
        assert!(matches!(err, ExportError::Json { .. }), "got: {err:?}");
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_records(&dir.path().join("absent.json")).await.unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }), "got: {err:?}");
    }
}
