mod common;

use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;
use book_catalog::domain::entities::BookInput;
use book_catalog::domain::repositories::BookRepository;
use book_catalog::error::AppError;
use book_catalog::infrastructure::persistence::PgBookRepository;

fn input(title: &str, author: &str, price: f64) -> BookInput {
    BookInput {
        title: title.to_string(),
        author: author.to_string(),
        price,
        tags: vec!["craft".to_string(), "clean".to_string()],
    }
}

#[sqlx::test]
async fn test_create_and_get_book(pool: PgPool) {
    let repo = PgBookRepository::new(Arc::new(pool));

    let created = repo
        .create(input("Clean Code", "Robert Martin", 39.99))
        .await
        .unwrap();

    assert_eq!(created.title, "Clean Code");
    assert_eq!(created.author, "Robert Martin");
    assert_eq!(created.price, 39.99);
    assert_eq!(created.tags, vec!["craft", "clean"]);
    assert_eq!(created.created_at, created.updated_at);

    let fetched = repo.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[sqlx::test]
async fn test_get_unknown_book(pool: PgPool) {
    let repo = PgBookRepository::new(Arc::new(pool));

    let result = repo.get_by_id(Uuid::now_v7()).await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[sqlx::test]
async fn test_create_duplicate_title_author(pool: PgPool) {
    let repo = PgBookRepository::new(Arc::new(pool.clone()));

    repo.create(input("Dune", "Frank Herbert", 10.0))
        .await
        .unwrap();
    let result = repo.create(input("Dune", "Frank Herbert", 12.0)).await;

    assert!(matches!(result, Err(AppError::Duplicate { .. })));
    assert_eq!(common::count_books(&pool).await, 1);
}

#[sqlx::test]
async fn test_uniqueness_is_case_sensitive(pool: PgPool) {
    let repo = PgBookRepository::new(Arc::new(pool));

    repo.create(input("Dune", "Frank Herbert", 10.0))
        .await
        .unwrap();
    let result = repo.create(input("dune", "Frank Herbert", 10.0)).await;

    assert!(result.is_ok());
}

#[sqlx::test]
async fn test_concurrent_duplicate_creates(pool: PgPool) {
    let repo = PgBookRepository::new(Arc::new(pool.clone()));

    let (first, second) = tokio::join!(
        repo.create(input("Emma", "Jane Austen", 8.5)),
        repo.create(input("Emma", "Jane Austen", 8.5)),
    );

    let successes = [&first, &second].iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);
    assert!(
        matches!(first, Err(AppError::Duplicate { .. }))
            || matches!(second, Err(AppError::Duplicate { .. }))
    );
    assert_eq!(common::count_books(&pool).await, 1);
}

#[sqlx::test]
async fn test_update_replaces_fields(pool: PgPool) {
    let repo = PgBookRepository::new(Arc::new(pool));

    let created = repo
        .create(input("Clean Code", "Robert Martin", 39.99))
        .await
        .unwrap();

    let updated = repo
        .update(
            created.id,
            BookInput {
                title: "Clean Architecture".to_string(),
                author: "Robert C. Martin".to_string(),
                price: 34.5,
                tags: vec![],
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Clean Architecture");
    assert_eq!(updated.author, "Robert C. Martin");
    assert_eq!(updated.price, 34.5);
    assert!(updated.tags.is_empty());
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
}

#[sqlx::test]
async fn test_update_to_own_pair_is_allowed(pool: PgPool) {
    let repo = PgBookRepository::new(Arc::new(pool));

    let created = repo
        .create(input("Dune", "Frank Herbert", 10.0))
        .await
        .unwrap();
    let updated = repo
        .update(created.id, input("Dune", "Frank Herbert", 11.0))
        .await
        .unwrap();

    assert_eq!(updated.price, 11.0);
}

#[sqlx::test]
async fn test_update_collision(pool: PgPool) {
    let repo = PgBookRepository::new(Arc::new(pool));

    repo.create(input("Dune", "Frank Herbert", 10.0))
        .await
        .unwrap();
    let other = repo
        .create(input("Dune Messiah", "Frank Herbert", 10.0))
        .await
        .unwrap();

    let result = repo
        .update(other.id, input("Dune", "Frank Herbert", 10.0))
        .await;

    assert!(matches!(result, Err(AppError::Duplicate { .. })));
    let unchanged = repo.get_by_id(other.id).await.unwrap();
    assert_eq!(unchanged.title, "Dune Messiah");
}

#[sqlx::test]
async fn test_update_unknown_book(pool: PgPool) {
    let repo = PgBookRepository::new(Arc::new(pool));

    let result = repo
        .update(Uuid::now_v7(), input("Dune", "Frank Herbert", 10.0))
        .await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[sqlx::test]
async fn test_delete_is_idempotent(pool: PgPool) {
    let id = common::create_test_book(&pool, "Dune", "Frank Herbert", 10.0).await;
    let repo = PgBookRepository::new(Arc::new(pool));

    assert!(repo.delete(id).await.unwrap());
    assert!(!repo.delete(id).await.unwrap());
    assert!(matches!(
        repo.get_by_id(id).await,
        Err(AppError::NotFound { .. })
    ));
}

#[sqlx::test]
async fn test_list_pages_in_creation_order(pool: PgPool) {
    let first = common::create_test_book(&pool, "A", "Author", 1.0).await;
    let second = common::create_test_book(&pool, "B", "Author", 2.0).await;
    let third = common::create_test_book(&pool, "C", "Author", 3.0).await;
    let repo = PgBookRepository::new(Arc::new(pool));

    let page0 = repo.list(0, 2).await.unwrap();
    let page1 = repo.list(1, 2).await.unwrap();
    let beyond = repo.list(5, 2).await.unwrap();

    assert_eq!(
        page0.iter().map(|b| b.id).collect::<Vec<_>>(),
        vec![first, second]
    );
    assert_eq!(page1.iter().map(|b| b.id).collect::<Vec<_>>(), vec![third]);
    assert!(beyond.is_empty());
    assert_eq!(repo.count().await.unwrap(), 3);
}

#[sqlx::test]
async fn test_list_empty_store(pool: PgPool) {
    let repo = PgBookRepository::new(Arc::new(pool));

    assert!(repo.list(0, 10).await.unwrap().is_empty());
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[sqlx::test]
async fn test_find_by_author_ignores_case(pool: PgPool) {
    common::create_test_book(&pool, "Emma", "Jane Austen", 8.5).await;
    common::create_test_book(&pool, "Persuasion", "JANE AUSTEN", 9.0).await;
    common::create_test_book(&pool, "Dune", "Frank Herbert", 10.0).await;
    let repo = PgBookRepository::new(Arc::new(pool));

    let books = repo.find_by_author("jane austen").await.unwrap();

    let titles: Vec<_> = books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Emma", "Persuasion"]);
}

#[sqlx::test]
async fn test_find_by_author_requires_exact_match(pool: PgPool) {
    common::create_test_book(&pool, "Emma", "Jane Austen", 8.5).await;
    let repo = PgBookRepository::new(Arc::new(pool));

    assert!(repo.find_by_author("Austen").await.unwrap().is_empty());
}

#[sqlx::test]
async fn test_search_by_title_substring(pool: PgPool) {
    common::create_test_book(&pool, "The Rust Programming Language", "Klabnik", 40.0).await;
    common::create_test_book(&pool, "Rust in Action", "McNamara", 35.0).await;
    common::create_test_book(&pool, "Dune", "Frank Herbert", 10.0).await;
    let repo = PgBookRepository::new(Arc::new(pool));

    let books = repo.search_by_title("rUsT").await.unwrap();

    assert_eq!(books.len(), 2);
    assert!(books.iter().all(|b| b.title.to_lowercase().contains("rust")));
}

#[sqlx::test]
async fn test_search_treats_wildcards_literally(pool: PgPool) {
    common::create_test_book(&pool, "100% Rust", "Someone", 5.0).await;
    common::create_test_book(&pool, "1000 Recipes", "Someone", 5.0).await;
    let repo = PgBookRepository::new(Arc::new(pool));

    let books = repo.search_by_title("100%").await.unwrap();

    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "100% Rust");
    assert!(repo.search_by_title("_").await.unwrap().is_empty());
}

#[sqlx::test]
async fn test_health_check(pool: PgPool) {
    let repo = PgBookRepository::new(Arc::new(pool));

    assert!(repo.health_check().await);
}
