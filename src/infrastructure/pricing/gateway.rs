//! Pricing gateway trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Ways a discount lookup can fail.
///
/// Every variant is surfaced to callers; no failure is replaced by a default
/// discount.
#[derive(Debug, Error)]
pub enum PricingError {
    /// The oracle could not be reached or did not answer within the timeout.
    #[error("pricing oracle unreachable: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("pricing oracle returned status {0}")]
    Status(u16),

    #[error("pricing oracle returned an unreadable body: {0}")]
    InvalidBody(String),

    #[error("pricing oracle response has no discountPct field")]
    MissingField,

    #[error("pricing oracle discountPct is not a number")]
    NonNumeric,

    #[error("pricing oracle discountPct {0} is outside [0, 1)")]
    OutOfRange(f64),
}

/// Remote discount oracle.
///
/// One call per quote, no retry, no caching.
///
/// # Implementations
///
/// - [`crate::infrastructure::pricing::HttpPricingGateway`] - HTTP client for the oracle
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PricingGateway: Send + Sync {
    /// Asks the oracle for the discount fraction applicable to a book.
    ///
    /// # Returns
    ///
    /// A fraction in `[0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] when the request fails, the status is not a
    /// success, or the body does not carry a usable `discountPct`.
    async fn fetch_discount(&self, title: &str, author: &str, price: f64)
    -> Result<f64, PricingError>;
}
