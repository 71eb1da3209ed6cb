//! Application state and the admin mutation pipeline.
//!
//! The admin binary is the only writer of the catalogue document. It keeps
//! the session's catalogue in memory (list + baseline snapshot) and funnels
//! every mutation through [`AppState::apply_and_persist`]: mutate a scratch
//! copy, merge-and-upload it, and only on success adopt the merged result.
//! A failed persist leaves the in-memory catalogue exactly as it was.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::instrument;

use tiendita_core::{Catalog, Product};
use tiendita_store::{CatalogStore, StoreError, SupabaseStore};

use crate::config::AdminConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    store: CatalogStore<SupabaseStore>,
    // In-process lock over the session catalogue. The remote document itself
    // stays lock-free: concurrent admin processes still race last-write-wins.
    catalog: RwLock<Catalog>,
}

impl AppState {
    /// Create a new application state with an empty catalogue.
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        let store = SupabaseStore::new(&config.supabase);
        let catalog_store = CatalogStore::with_location(
            store,
            &config.catalog_bucket,
            &config.catalog_document,
        );

        Self {
            inner: Arc::new(AppStateInner {
                config,
                store: catalog_store,
                catalog: RwLock::new(Catalog::new()),
            }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the catalogue document store.
    #[must_use]
    pub fn store(&self) -> &CatalogStore<SupabaseStore> {
        &self.inner.store
    }

    /// Run a read-only closure against the in-memory catalogue.
    pub async fn with_catalog<T>(&self, f: impl FnOnce(&Catalog) -> T) -> T {
        let catalog = self.inner.catalog.read().await;
        f(&catalog)
    }

    /// Re-download the catalogue and reset the baseline snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the download fails; the in-memory
    /// catalogue is left untouched in that case.
    #[instrument(skip(self))]
    pub async fn reload(&self) -> Result<usize, StoreError> {
        let products = self.inner.store.load().await?;
        let count = products.len();

        let mut catalog = self.inner.catalog.write().await;
        catalog.replace_from_remote(products);
        tracing::info!(count, "catalogue reloaded");
        Ok(count)
    }

    /// Apply a mutation and persist it as one unit.
    ///
    /// The closure edits a scratch copy of the catalogue; the scratch list is
    /// then merged against the current remote document and uploaded. Only
    /// after a successful upload does the merged list (concurrent additions
    /// included) become the new in-memory catalogue with a fresh baseline.
    /// On any failure the previous catalogue stays visible, so views can
    /// re-render consistently.
    ///
    /// Holding the write lock across the round-trip serializes mutations
    /// within this process.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the merge round-trip fails.
    #[instrument(skip(self, mutate))]
    pub async fn apply_and_persist<T>(
        &self,
        mutate: impl FnOnce(&mut Catalog) -> T + Send,
    ) -> Result<T, StoreError> {
        let mut catalog = self.inner.catalog.write().await;

        let mut scratch = catalog.clone();
        let out = mutate(&mut scratch);

        let merged: Vec<Product> = self
            .inner
            .store
            .persist(scratch.products(), scratch.baseline())
            .await?;

        scratch.replace_from_remote(merged);
        *catalog = scratch;
        Ok(out)
    }
}
