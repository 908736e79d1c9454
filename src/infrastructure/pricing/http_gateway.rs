//! HTTP client for the remote pricing oracle.

use super::gateway::{PricingError, PricingGateway};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Name of the discount field in the oracle's JSON response.
const DISCOUNT_FIELD: &str = "discountPct";

/// Pricing gateway backed by `GET {base}/discount?title=&author=&price=`.
///
/// The underlying client pools connections and applies a request timeout, so a
/// hung oracle surfaces as [`PricingError::Transport`] instead of stalling the
/// quote.
pub struct HttpPricingGateway {
    client: Client,
    discount_url: Url,
}

impl HttpPricingGateway {
    /// Builds a gateway for the oracle at `base_url`.
    ///
    /// A trailing slash on `base_url` is ignored; a path prefix is kept
    /// (`http://host/pricing` → `http://host/pricing/discount`).
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid URL or the HTTP client
    /// cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let discount_url = Url::parse(&format!("{}/discount", base_url.trim_end_matches('/')))
            .with_context(|| format!("Invalid pricing base URL '{}'", base_url))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build pricing HTTP client")?;

        info!(url = %discount_url, ?timeout, "Pricing gateway configured");

        Ok(Self {
            client,
            discount_url,
        })
    }

    fn request_url(&self, title: &str, author: &str, price: f64) -> Url {
        let mut url = self.discount_url.clone();
        url.query_pairs_mut()
            .append_pair("title", title)
            .append_pair("author", author)
            .append_pair("price", &price.to_string());
        url
    }
}

/// Extracts the discount fraction from an oracle response body.
fn parse_discount(body: &[u8]) -> Result<f64, PricingError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| PricingError::InvalidBody(e.to_string()))?;

    let object = value
        .as_object()
        .ok_or_else(|| PricingError::InvalidBody("expected a JSON object".to_string()))?;

    let discount = object
        .get(DISCOUNT_FIELD)
        .ok_or(PricingError::MissingField)?
        .as_f64()
        .ok_or(PricingError::NonNumeric)?;

    if !(0.0..1.0).contains(&discount) {
        return Err(PricingError::OutOfRange(discount));
    }

    Ok(discount)
}

#[async_trait]
impl PricingGateway for HttpPricingGateway {
    async fn fetch_discount(
        &self,
        title: &str,
        author: &str,
        price: f64,
    ) -> Result<f64, PricingError> {
        let url = self.request_url(title, author, price);

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(error = %e, timeout = e.is_timeout(), "Pricing oracle request failed");
            PricingError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), title, author, "Pricing oracle rejected request");
            return Err(PricingError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            warn!(error = %e, "Failed to read pricing oracle response");
            PricingError::Transport(e)
        })?;

        let discount = parse_discount(&body).inspect_err(|e| {
            warn!(error = %e, title, author, "Unusable pricing oracle response");
        })?;

        debug!(title, author, price, discount, "Discount received");
        Ok(discount)
    }
}
