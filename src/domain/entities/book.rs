//! Book entity and the caller-supplied fields used to create or replace one.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A catalog entry.
///
/// `id`, `created_at` and `updated_at` are owned by the store; callers only
/// ever supply a [`BookInput`].
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    /// Original, undiscounted price.
    pub price: f64,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Creates a new Book instance.
    pub fn new(
        id: Uuid,
        title: String,
        author: String,
        price: f64,
        tags: Vec<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            author,
            price,
            tags,
            created_at,
            updated_at,
        }
    }
}

/// Fields of a book as provided by a caller.
///
/// Used wholesale by both create and update. Inputs are validated at the API
/// boundary: non-blank title and author, positive price.
#[derive(Debug, Clone, PartialEq)]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub price: f64,
    pub tags: Vec<String>,
}

/// One page of books plus the information needed to navigate the rest.
#[derive(Debug, Clone)]
pub struct BookPage {
    pub content: Vec<Book>,
    /// Zero-based page index.
    pub page: u32,
    pub size: u32,
    pub total_elements: i64,
}

impl BookPage {
    /// Number of pages needed for `total_elements`. `size` is at least 1.
    pub fn total_pages(&self) -> i64 {
        let size = i64::from(self.size);
        (self.total_elements + size - 1) / size
    }
}
