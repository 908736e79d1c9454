//! Repository trait for book storage.

use crate::domain::entities::{Book, BookInput};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Durable keyed storage for books.
///
/// Implementations must enforce uniqueness of `(title, author)` atomically in
/// the storage engine: create and update are single write operations that fail
/// with [`AppError::Duplicate`] on collision, never a lookup followed by a
/// write.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBookRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_book.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Persists a new book, assigning its id and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Duplicate`] if a book with the same title and author
    /// (case-sensitive) already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, input: BookInput) -> Result<Book, AppError>;

    /// Retrieves a book by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no book has this id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn get_by_id(&self, id: Uuid) -> Result<Book, AppError>;

    /// Replaces title, author, price and tags of an existing book.
    ///
    /// `id` and `created_at` are preserved; `updated_at` is advanced.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no book has this id.
    /// Returns [`AppError::Duplicate`] if the new pair collides with a
    /// different book.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: Uuid, input: BookInput) -> Result<Book, AppError>;

    /// Removes a book.
    ///
    /// Returns `Ok(true)` if a book was removed, `Ok(false)` if the id was
    /// already absent. Absence is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;

    /// Lists books in a stable order.
    ///
    /// # Arguments
    ///
    /// - `page` - Page index (0-indexed)
    /// - `page_size` - Number of items per page
    ///
    /// Pages past the end yield an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, page: i64, page_size: i64) -> Result<Vec<Book>, AppError>;

    /// Counts all stored books.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Finds books whose author equals `author`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_author(&self, author: &str) -> Result<Vec<Book>, AppError>;

    /// Finds books whose title contains `fragment`, ignoring case.
    ///
    /// `fragment` is matched literally; `%` and `_` carry no wildcard meaning.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn search_by_title(&self, fragment: &str) -> Result<Vec<Book>, AppError>;

    /// Checks that the backing store answers queries.
    async fn health_check(&self) -> bool;
}
