use std::sync::Arc;

use crate::application::services::BookCatalogService;
use crate::infrastructure::persistence::PgBookRepository;
use crate::infrastructure::pricing::HttpPricingGateway;

/// Catalog service as wired in production.
pub type CatalogService = BookCatalogService<PgBookRepository, HttpPricingGateway>;

/// Shared state handed to every handler.
///
/// Holds no mutable state of its own; all mutation goes through the store.
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService>,
}

impl AppState {
    pub fn new(catalog_service: Arc<CatalogService>) -> Self {
        Self { catalog_service }
    }
}
