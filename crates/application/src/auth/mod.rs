//! Credential lifecycle: the token cache and the token service.

mod token_cache;
mod token_service;

pub use token_cache::TokenCache;
pub use token_service::{TokenError, TokenService};
