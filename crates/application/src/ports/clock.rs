//! Clock port for time-related operations

use chrono::{DateTime, Utc};

/// Port for reading the current time.
///
/// Token expiry decisions go through this trait so tests can drive the
/// cache with a fake clock instead of sleeping.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;
}
