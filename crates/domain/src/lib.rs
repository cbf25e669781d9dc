//! Palisade Domain - Core gateway types
//!
//! This crate defines the domain model for the Palisade vendor gateway.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod identity;
pub mod request;
pub mod response;
pub mod settings;
pub mod token;
pub mod vendor;

pub use error::{DomainError, DomainResult};
pub use identity::{ADMIN_ROLE, Caller, DeletionReceipt, DeletionRequest, UserRecord};
pub use request::{HttpMethod, InboundRequest, UpstreamRequest};
pub use response::{StatusCode, VendorResponse};
pub use settings::{ClientCredentials, VendorSettings};
pub use token::{CachedToken, EXPIRY_SAFETY_MARGIN_SECS, TokenGrant};
pub use vendor::{PUBLIC_API_SCOPE, TENANT_HEADER, VendorEndpoints};
