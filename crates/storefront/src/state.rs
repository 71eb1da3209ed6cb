//! Application state shared across handlers.

use std::sync::Arc;

use tiendita_store::{CatalogStore, SupabaseStore};

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The storefront holds no in-memory catalogue:
/// every page load reads the current document, so public views always see
/// the latest persisted state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogStore<SupabaseStore>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let store = SupabaseStore::new(&config.supabase);
        let catalog = CatalogStore::with_location(
            store,
            &config.catalog_bucket,
            &config.catalog_document,
        );

        Self {
            inner: Arc::new(AppStateInner { config, catalog }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalogue document store.
    #[must_use]
    pub fn catalog(&self) -> &CatalogStore<SupabaseStore> {
        &self.inner.catalog
    }
}
