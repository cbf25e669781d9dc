//! Inbound and upstream request shapes.

mod inbound;
mod method;
mod upstream;

pub use inbound::InboundRequest;
pub use method::HttpMethod;
pub use upstream::UpstreamRequest;
