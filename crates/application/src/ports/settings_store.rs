//! Settings store port
//!
//! Defines the interface to the configuration document store.

use async_trait::async_trait;
use palisade_domain::VendorSettings;

/// Errors that can occur while reading the settings document.
#[derive(Debug, thiserror::Error)]
pub enum SettingsStoreError {
    /// The well-known settings document does not exist. This is a hard
    /// failure; there is no default configuration.
    #[error("vendor API settings not found")]
    Missing,

    /// The store could not be read or the document could not be decoded.
    #[error("settings store failure: {0}")]
    Backend(String),
}

/// Read access to the vendor settings document.
///
/// Deliberately uncached: configuration may change at any time, and the
/// token cache already absorbs the latency on the hot path.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Loads the settings document.
    ///
    /// # Errors
    /// [`SettingsStoreError::Missing`] when the document is absent,
    /// [`SettingsStoreError::Backend`] on store failures.
    async fn load(&self) -> Result<VendorSettings, SettingsStoreError>;
}
