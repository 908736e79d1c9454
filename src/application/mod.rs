//! Application layer services implementing business logic.
//!
//! Services consume repository and gateway traits and provide a clean API for
//! HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::book_service::BookCatalogService`] - Book lifecycle and discounted price quotes

pub mod services;
