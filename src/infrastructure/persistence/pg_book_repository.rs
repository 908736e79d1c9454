//! PostgreSQL implementation of book repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Book, BookInput};
use crate::domain::repositories::BookRepository;
use crate::error::AppError;
use crate::utils::db_error::{BOOKS_TITLE_AUTHOR_KEY, is_unique_violation_on};

/// PostgreSQL repository for book storage and retrieval.
///
/// `(title, author)` uniqueness is the `books_title_author_key` constraint;
/// inserts and updates rely on it instead of checking beforehand.
pub struct PgBookRepository {
    pool: Arc<PgPool>,
}

impl PgBookRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: Uuid,
    title: String,
    author: String,
    price: f64,
    tags: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BookRow> for Book {
    fn from(r: BookRow) -> Self {
        Book::new(
            r.id,
            r.title,
            r.author,
            r.price,
            r.tags,
            r.created_at,
            r.updated_at,
        )
    }
}

/// Maps a failed insert/update, naming the colliding pair on duplicates.
fn map_write_error(e: sqlx::Error, input: &BookInput) -> AppError {
    if is_unique_violation_on(&e, BOOKS_TITLE_AUTHOR_KEY) {
        return AppError::duplicate(
            "A book with this title and author already exists",
            json!({ "title": input.title, "author": input.author }),
        );
    }
    e.into()
}

/// Escapes LIKE metacharacters so `fragment` matches literally.
fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn create(&self, input: BookInput) -> Result<Book, AppError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            INSERT INTO books (id, title, author, price, tags)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, author, price, tags, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&input.title)
        .bind(&input.author)
        .bind(input.price)
        .bind(&input.tags)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| map_write_error(e, &input))?;

        Ok(row.into())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Book, AppError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, author, price, tags, created_at, updated_at
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Book::from)
            .ok_or_else(|| AppError::not_found("Book not found", json!({ "id": id })))
    }

    async fn update(&self, id: Uuid, input: BookInput) -> Result<Book, AppError> {
        // updated_at must move forward even when two writes share a clock tick.
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            UPDATE books SET
                title      = $2,
                author     = $3,
                price      = $4,
                tags       = $5,
                updated_at = GREATEST(NOW(), updated_at + INTERVAL '1 microsecond')
            WHERE id = $1
            RETURNING id, title, author, price, tags, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.author)
        .bind(input.price)
        .bind(&input.tags)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| map_write_error(e, &input))?;

        row.map(Book::from)
            .ok_or_else(|| AppError::not_found("Book not found", json!({ "id": id })))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, page: i64, page_size: i64) -> Result<Vec<Book>, AppError> {
        let offset = page * page_size;

        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, author, price, tags, created_at, updated_at
            FROM books
            ORDER BY created_at, id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page_size)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM books")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn find_by_author(&self, author: &str) -> Result<Vec<Book>, AppError> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, author, price, tags, created_at, updated_at
            FROM books
            WHERE lower(author) = lower($1)
            ORDER BY created_at, id
            "#,
        )
        .bind(author)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn search_by_title(&self, fragment: &str) -> Result<Vec<Book>, AppError> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, author, price, tags, created_at, updated_at
            FROM books
            WHERE title ILIKE '%' || $1 || '%'
            ORDER BY created_at, id
            "#,
        )
        .bind(escape_like(fragment))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
