//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces used by the application layer, providing
//! concrete implementations for persistence and the pricing oracle.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`pricing`] - Pricing oracle gateway

pub mod persistence;
pub mod pricing;
