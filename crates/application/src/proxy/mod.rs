//! Forwarding proxy to the vendor API.

mod service;

pub use service::{ProxyError, ProxyService};
