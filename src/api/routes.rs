//! API route configuration.

use crate::api::handlers::{
    books_by_author_handler, create_book_handler, delete_book_handler, get_book_handler,
    list_books_handler, quote_price_handler, search_books_handler, update_book_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Book catalog routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST   /books`                          - Create a book
/// - `GET    /books?page&size`                - List books (paginated)
/// - `GET    /books/by-author?author=`        - Author lookup (case-insensitive)
/// - `GET    /books/search?q=`                - Title substring search (case-insensitive)
/// - `GET    /books/{id}`                     - Get a book
/// - `PUT    /books/{id}`                     - Replace a book
/// - `DELETE /books/{id}`                     - Delete a book
/// - `GET    /books/{id}/price-with-discount` - Discounted price quote
pub fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books_handler).post(create_book_handler))
        .route("/books/by-author", get(books_by_author_handler))
        .route("/books/search", get(search_books_handler))
        .route(
            "/books/{id}",
            get(get_book_handler)
                .put(update_book_handler)
                .delete(delete_book_handler),
        )
        .route("/books/{id}/price-with-discount", get(quote_price_handler))
}
