//! DTO for the discounted price endpoint.

use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::PriceQuote;

/// Response body for `GET /api/books/{id}/price-with-discount`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuoteResponse {
    pub book_id: Uuid,
    pub original_price: f64,
    pub discount_pct: f64,
    pub final_price: f64,
}

impl From<PriceQuote> for PriceQuoteResponse {
    fn from(q: PriceQuote) -> Self {
        Self {
            book_id: q.book_id,
            original_price: q.original_price,
            discount_pct: q.discount_pct,
            final_price: q.final_price,
        }
    }
}
