//! Palisade Application - gateway services behind platform routing
//!
//! Ports define what the core needs from the outside world (time, the
//! configuration document, the vendor endpoints, the user store, the
//! identity provider); services implement the credential lifecycle, the
//! forwarding proxy, and the gated deletion on top of them.

pub mod admin;
pub mod auth;
pub mod ports;
pub mod proxy;

pub use admin::{DeleteUser, DeleteUserInput, DeletionError};
pub use auth::{TokenCache, TokenError, TokenService};
pub use proxy::{ProxyError, ProxyService};
