//! Palisade Infrastructure - adapters behind the application ports
//!
//! Reqwest adapters for the vendor token endpoint, the vendor API, and the
//! identity provider; file-backed JSON document stores for settings and
//! user records; the system clock.

pub mod adapters;
pub mod persistence;
pub mod vendor;
