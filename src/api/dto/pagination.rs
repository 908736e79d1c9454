//! Pagination query parameters and the paged book listing.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::api::dto::book::BookResponse;
use crate::domain::entities::BookPage;

/// Largest page size a client may request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Pagination query parameters.
///
/// Uses `serde_with` to parse numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub size: Option<u32>,
}

impl PageParams {
    /// Validates pagination parameters.
    ///
    /// # Defaults
    ///
    /// - `page`: 0 (zero-based)
    /// - `size`: 10
    ///
    /// # Validation
    ///
    /// - Size must be between 1 and [`MAX_PAGE_SIZE`]
    ///
    /// # Returns
    ///
    /// `(page, size)` tuple.
    pub fn validate_and_get(&self) -> Result<(u32, u32), String> {
        let page = self.page.unwrap_or(0);
        let size = self.size.unwrap_or(10);

        if !(1..=MAX_PAGE_SIZE).contains(&size) {
            return Err(format!("Page size must be between 1 and {}", MAX_PAGE_SIZE));
        }

        Ok((page, size))
    }
}

/// One page of books.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPageResponse {
    pub content: Vec<BookResponse>,
    pub page: u32,
    pub size: u32,
    pub total_elements: i64,
    pub total_pages: i64,
}

impl From<BookPage> for BookPageResponse {
    fn from(p: BookPage) -> Self {
        let total_pages = p.total_pages();
        Self {
            content: p.content.into_iter().map(BookResponse::from).collect(),
            page: p.page,
            size: p.size,
            total_elements: p.total_elements,
            total_pages,
        }
    }
}
