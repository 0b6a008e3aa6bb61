//! Application state shared across handlers

use std::sync::Arc;

use crate::db::Catalog;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<dyn Catalog>,
}

impl AppState {
    pub fn new(catalog: impl Catalog + 'static) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// State over a catalog the caller keeps a handle to (tests inspect it)
    pub fn from_shared(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &dyn Catalog {
        self.catalog.as_ref()
    }
}
