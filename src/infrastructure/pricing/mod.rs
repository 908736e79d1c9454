//! Pricing oracle integration.
//!
//! Provides a [`PricingGateway`] trait with one implementation:
//! - [`HttpPricingGateway`] - Blocking request/response against the remote oracle

mod gateway;
mod http_gateway;

#[cfg(test)]
pub use gateway::MockPricingGateway;
pub use gateway::{PricingError, PricingGateway};
pub use http_gateway::HttpPricingGateway;
