//! User record document store.
//!
//! All records live in one JSON document keyed by uid:
//! ```json
//! {
//!   "uid-1": { "role": "admin" },
//!   "uid-2": { "role": "member" }
//! }
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use palisade_application::ports::{DirectoryError, UserDirectory};
use palisade_domain::UserRecord;

/// File-backed user directory.
#[derive(Debug, Clone)]
pub struct FileUserDirectory {
    path: PathBuf,
}

impl FileUserDirectory {
    /// Creates a directory reading the document at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl UserDirectory for FileUserDirectory {
    async fn find(&self, uid: &str) -> Result<Option<UserRecord>, DirectoryError> {
        // An absent store means no records, which is not an error: the
        // caller simply has no role.
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read(&self.path)
            .await
            .map_err(|e| DirectoryError::Backend(e.to_string()))?;
        let records: HashMap<String, UserRecord> = serde_json::from_slice(&content)
            .map_err(|e| DirectoryError::Backend(format!("malformed user records: {e}")))?;
        Ok(records.get(uid).cloned())
    }
}
