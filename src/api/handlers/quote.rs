//! Handler for the discounted price endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::quote::PriceQuoteResponse;
use crate::api::handlers::books::parse_book_id;
use crate::error::AppError;
use crate::state::AppState;

/// Quotes a book's price after the pricing oracle's discount.
///
/// # Endpoint
///
/// `GET /api/books/{id}/price-with-discount`
///
/// # Response
///
/// ```json
/// {
///   "bookId": "0190f5b2-...",
///   "originalPrice": 39.99,
///   "discountPct": 0.2,
///   "finalPrice": 31.99
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the book doesn't exist.
/// Returns 502 Bad Gateway if the pricing oracle fails or answers with an
/// unusable response.
pub async fn quote_price_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<PriceQuoteResponse>, AppError> {
    let id = parse_book_id(&id)?;
    let quote = state.catalog_service.quote_price(id).await?;
    Ok(Json(quote.into()))
}
