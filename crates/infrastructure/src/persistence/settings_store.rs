//! Vendor settings document store.
//!
//! The settings live in a single JSON document:
//! ```json
//! {
//!   "clientId": "...",
//!   "clientSecret": "...",
//!   "tenantIdentifier": "..."
//! }
//! ```
//! Every load re-reads the document — configuration changes take effect on
//! the next request without a restart.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use palisade_application::ports::{SettingsStore, SettingsStoreError};
use palisade_domain::VendorSettings;

/// File-backed settings store.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    /// Creates a store reading the document at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SettingsStore for FileSettingsStore {
    async fn load(&self) -> Result<VendorSettings, SettingsStoreError> {
        if !self.path.exists() {
            return Err(SettingsStoreError::Missing);
        }

        let content = fs::read(&self.path)
            .await
            .map_err(|e| SettingsStoreError::Backend(e.to_string()))?;
        let settings = serde_json::from_slice(&content)
            .map_err(|e| SettingsStoreError::Backend(format!("malformed settings document: {e}")))?;
        Ok(settings)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_missing_document_is_a_hard_failure() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSettingsStore::new(dir.path().join("settings.json"));

        let result = store.load().await;
        assert!(matches!(result, Err(SettingsStoreError::Missing)));
    }

    #[tokio::test]
    async fn test_load_reads_document_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"clientId":"id-1","clientSecret":"s3cret","tenantIdentifier":"shop-7"}"#,
        )
        .unwrap();

        let settings = FileSettingsStore::new(&path).load().await.unwrap();
        assert_eq!(settings.client_id, "id-1");
        assert_eq!(settings.tenant_identifier, "shop-7");
    }

    #[tokio::test]
    async fn test_malformed_document_is_a_backend_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = FileSettingsStore::new(&path).load().await;
        assert!(matches!(result, Err(SettingsStoreError::Backend(_))));
    }

    #[tokio::test]
    async fn test_load_is_uncached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"clientId":"a","clientSecret":"b"}"#).unwrap();

        let store = FileSettingsStore::new(&path);
        assert_eq!(store.load().await.unwrap().client_id, "a");

        std::fs::write(&path, r#"{"clientId":"c","clientSecret":"d"}"#).unwrap();
        assert_eq!(store.load().await.unwrap().client_id, "c");
    }
}
