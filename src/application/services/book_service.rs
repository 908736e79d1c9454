//! Book catalog service: lifecycle pass-through and price quoting.

use std::sync::Arc;

use crate::domain::entities::{Book, BookInput, BookPage, PriceQuote};
use crate::domain::repositories::BookRepository;
use crate::error::AppError;
use crate::infrastructure::pricing::PricingGateway;
use serde_json::json;
use uuid::Uuid;

/// Orchestrates the book store and the pricing oracle.
///
/// Store errors are propagated unchanged. The only error this service adds is
/// [`AppError::ExternalService`], on the quoting path. Inputs are assumed to be
/// validated by the caller.
pub struct BookCatalogService<R: BookRepository, P: PricingGateway> {
    repository: Arc<R>,
    pricing: Arc<P>,
}

impl<R: BookRepository, P: PricingGateway> BookCatalogService<R, P> {
    /// Creates a new catalog service.
    pub fn new(repository: Arc<R>, pricing: Arc<P>) -> Self {
        Self {
            repository,
            pricing,
        }
    }

    /// Adds a book to the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Duplicate`] if the title/author pair is taken.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(&self, input: BookInput) -> Result<Book, AppError> {
        let book = self.repository.create(input).await?;
        tracing::info!(id = %book.id, title = %book.title, author = %book.author, "Book created");
        Ok(book)
    }

    /// Retrieves a book by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is unknown.
    pub async fn get(&self, id: Uuid) -> Result<Book, AppError> {
        self.repository.get_by_id(id).await
    }

    /// Replaces a book's title, author, price and tags.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is unknown.
    /// Returns [`AppError::Duplicate`] if the new pair belongs to another book.
    pub async fn update(&self, id: Uuid, input: BookInput) -> Result<Book, AppError> {
        let book = self.repository.update(id, input).await?;
        tracing::info!(id = %book.id, "Book updated");
        Ok(book)
    }

    /// Removes a book. Deleting an unknown id succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let removed = self.repository.delete(id).await?;
        tracing::info!(%id, removed, "Book delete requested");
        Ok(())
    }

    /// Returns page `page` (0-indexed) of the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(&self, page: u32, size: u32) -> Result<BookPage, AppError> {
        let content = self
            .repository
            .list(i64::from(page), i64::from(size))
            .await?;
        let total_elements = self.repository.count().await?;

        Ok(BookPage {
            content,
            page,
            size,
            total_elements,
        })
    }

    /// Finds books by author, ignoring case.
    pub async fn find_by_author(&self, author: &str) -> Result<Vec<Book>, AppError> {
        self.repository.find_by_author(author).await
    }

    /// Finds books whose title contains `query`, ignoring case.
    pub async fn search(&self, query: &str) -> Result<Vec<Book>, AppError> {
        self.repository.search_by_title(query).await
    }

    /// Quotes the discounted price of a book.
    ///
    /// Looks the book up, asks the pricing oracle once for a discount and
    /// returns `price * (1 - discount)` rounded half-up to two places.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is unknown (the oracle is not
    /// called).
    /// Returns [`AppError::ExternalService`] if the oracle fails in any way.
    pub async fn quote_price(&self, id: Uuid) -> Result<PriceQuote, AppError> {
        let book = self.repository.get_by_id(id).await?;

        let discount = self
            .pricing
            .fetch_discount(&book.title, &book.author, book.price)
            .await
            .inspect_err(|e| tracing::warn!(%id, error = %e, "Price quote failed"))?;

        PriceQuote::new(book.id, book.price, discount).ok_or_else(|| {
            AppError::internal(
                "Failed to compute discounted price",
                json!({ "price": book.price, "discount_pct": discount }),
            )
        })
    }

    /// Reports whether the book store is reachable.
    pub async fn is_store_healthy(&self) -> bool {
        self.repository.health_check().await
    }
}
