#![allow(dead_code)]

use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use book_catalog::api::handlers::health_handler;
use book_catalog::api::routes::book_routes;
use book_catalog::application::services::BookCatalogService;
use book_catalog::infrastructure::persistence::PgBookRepository;
use book_catalog::infrastructure::pricing::HttpPricingGateway;
use book_catalog::state::AppState;

/// Oracle address for tests that never request a quote.
pub const UNUSED_ORACLE: &str = "http://127.0.0.1:9";

pub async fn create_test_book(pool: &PgPool, title: &str, author: &str, price: f64) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO books (id, title, author, price, tags) VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(Uuid::now_v7())
    .bind(title)
    .bind(author)
    .bind(price)
    .bind(Vec::<String>::new())
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_books(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM books")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool, pricing_base_url: &str) -> AppState {
    let repository = Arc::new(PgBookRepository::new(Arc::new(pool)));
    let pricing =
        Arc::new(HttpPricingGateway::new(pricing_base_url, Duration::from_secs(2)).unwrap());

    AppState::new(Arc::new(BookCatalogService::new(repository, pricing)))
}

/// Builds a test server with the health check and every `/api/books` route.
pub fn make_server(pool: PgPool, pricing_base_url: &str) -> TestServer {
    let state = create_test_state(pool, pricing_base_url);
    let app = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", book_routes())
        .with_state(state);
    TestServer::new(app).unwrap()
}

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn spawn_pricing_oracle(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Returns a base URL on which nothing is listening.
pub async fn unreachable_oracle() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
