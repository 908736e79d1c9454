//! DTOs for book endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::domain::entities::{Book, BookInput};

/// Request body for `POST /api/books` and `PUT /api/books/{id}`.
///
/// Missing `title`, `author` or `price` deserialize to empty/zero values so they
/// are reported by validation (400) instead of as a body rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct BookRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub title: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub author: String,

    #[serde(default)]
    #[validate(range(exclusive_min = 0.0, message = "must be greater than 0"))]
    pub price: f64,

    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl BookRequest {
    /// Converts the validated request into domain input.
    pub fn into_input(self) -> BookInput {
        BookInput {
            title: self.title,
            author: self.author,
            price: self.price,
            tags: self.tags.unwrap_or_default(),
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// JSON representation of a stored book.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub price: f64,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Book> for BookResponse {
    fn from(b: Book) -> Self {
        Self {
            id: b.id,
            title: b.title,
            author: b.author,
            price: b.price,
            tags: b.tags,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

/// Query for `GET /api/books/by-author`.
#[derive(Debug, Deserialize)]
pub struct AuthorQuery {
    pub author: String,
}

/// Query for `GET /api/books/search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}
