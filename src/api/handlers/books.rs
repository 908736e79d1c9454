//! Handlers for book catalog endpoints.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::book::{AuthorQuery, BookRequest, BookResponse, SearchQuery};
use crate::api::dto::pagination::{BookPageResponse, PageParams};
use crate::error::AppError;
use crate::state::AppState;

/// Parses a path id. An id that is not a UUID cannot name a stored book.
pub(crate) fn parse_book_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::not_found("Book not found", json!({ "id": raw })))
}

/// Unwraps a JSON body, reporting malformed payloads as validation errors.
fn json_body(payload: Result<Json<BookRequest>, JsonRejection>) -> Result<BookRequest, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;
    request.validate()?;
    Ok(request)
}

fn query<T>(params: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    params.map(|Query(p)| p).map_err(|rejection| {
        AppError::bad_request(
            "Invalid query parameters",
            json!({ "reason": rejection.body_text() }),
        )
    })
}

/// Creates a book.
///
/// # Endpoint
///
/// `POST /api/books`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Clean Code",
///   "author": "Robert Martin",
///   "price": 39.99,
///   "tags": ["craft", "clean"]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 409 Conflict if a book with the same title and author exists.
pub async fn create_book_handler(
    State(state): State<AppState>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookResponse>), AppError> {
    let request = json_body(payload)?;

    let book = state.catalog_service.create(request.into_input()).await?;

    Ok((StatusCode::CREATED, Json(book.into())))
}

/// Returns a single book.
///
/// # Endpoint
///
/// `GET /api/books/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the book doesn't exist.
pub async fn get_book_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<BookResponse>, AppError> {
    let id = parse_book_id(&id)?;
    let book = state.catalog_service.get(id).await?;
    Ok(Json(book.into()))
}

/// Lists books page by page.
///
/// # Endpoint
///
/// `GET /api/books?page=0&size=10`
///
/// # Response
///
/// ```json
/// {
///   "content": [ ... ],
///   "page": 0,
///   "size": 10,
///   "totalElements": 42,
///   "totalPages": 5
/// }
/// ```
///
/// Pages past the end return an empty `content` array.
///
/// # Errors
///
/// Returns 400 Bad Request if `page` or `size` are invalid.
pub async fn list_books_handler(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<BookPageResponse>, AppError> {
    let params = query(params)?;
    let (page, size) = params
        .validate_and_get()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let page = state.catalog_service.list(page, size).await?;
    Ok(Json(page.into()))
}

/// Replaces a book's fields.
///
/// # Endpoint
///
/// `PUT /api/books/{id}`
///
/// Title, author, price and tags are replaced wholesale; `id` and `createdAt`
/// are preserved.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 404 Not Found if the book doesn't exist.
/// Returns 409 Conflict if another book already has the new title and author.
pub async fn update_book_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> Result<Json<BookResponse>, AppError> {
    let request = json_body(payload)?;
    let id = parse_book_id(&id)?;

    let book = state
        .catalog_service
        .update(id, request.into_input())
        .await?;

    Ok(Json(book.into()))
}

/// Deletes a book.
///
/// # Endpoint
///
/// `DELETE /api/books/{id}`
///
/// Idempotent: deleting an unknown or malformed id also returns 204.
pub async fn delete_book_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    if let Ok(id) = Uuid::parse_str(&id) {
        state.catalog_service.delete(id).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Finds books by author, ignoring case.
///
/// # Endpoint
///
/// `GET /api/books/by-author?author=Robert%20Martin`
pub async fn books_by_author_handler(
    State(state): State<AppState>,
    params: Result<Query<AuthorQuery>, QueryRejection>,
) -> Result<Json<Vec<BookResponse>>, AppError> {
    let params = query(params)?;
    let books = state.catalog_service.find_by_author(&params.author).await?;
    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// Searches titles by substring, ignoring case.
///
/// # Endpoint
///
/// `GET /api/books/search?q=clean`
pub async fn search_books_handler(
    State(state): State<AppState>,
    params: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Vec<BookResponse>>, AppError> {
    let params = query(params)?;
    let books = state.catalog_service.search(&params.q).await?;
    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}
