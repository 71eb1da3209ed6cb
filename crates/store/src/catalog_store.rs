//! Catalogue document access: load and merge-on-persist.

use std::collections::HashSet;

use tiendita_core::{Product, ProductId, merge_catalogs};

use crate::{ObjectStore, StoreError};

/// Default bucket holding the catalogue document.
pub const CATALOG_BUCKET: &str = "productos";

/// Name of the catalogue document.
pub const CATALOG_DOCUMENT: &str = "productos.json";

/// Reads and writes the shared catalogue document.
///
/// The document is the sole shared mutable resource in the system. It has no
/// locking or version token: two interleaved [`persist`](Self::persist) calls
/// race and the later upload wins. That is the documented contract (single
/// trusted admin operator), not a bug to patch here.
#[derive(Clone, Debug)]
pub struct CatalogStore<S> {
    store: S,
    bucket: String,
    document: String,
}

impl<S: ObjectStore> CatalogStore<S> {
    /// Create a store over the default bucket and document name.
    pub fn new(store: S) -> Self {
        Self::with_location(store, CATALOG_BUCKET, CATALOG_DOCUMENT)
    }

    /// Create a store over a custom bucket/document.
    pub fn with_location(store: S, bucket: &str, document: &str) -> Self {
        Self {
            store,
            bucket: bucket.to_string(),
            document: document.to_string(),
        }
    }

    /// The underlying object store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Load the catalogue.
    ///
    /// An absent document is an empty catalogue, not an error. An empty or
    /// unparseable body is also recovered as empty (with a warning); only
    /// transport/store failures surface as errors.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] for failures other than "document absent".
    pub async fn load(&self) -> Result<Vec<Product>, StoreError> {
        match self.store.download(&self.bucket, &self.document).await? {
            None => Ok(Vec::new()),
            Some(bytes) => Ok(parse_document(&bytes)),
        }
    }

    /// Merge the session's local list into the current remote document and
    /// upload the result.
    ///
    /// Downloads the *current* remote state first (never the locally cached
    /// one) so concurrent additions from other sessions survive; `baseline`
    /// tells the merge which absent ids are this session's deletions. On
    /// success returns the merged list - the caller should adopt it as its
    /// new in-memory state. On failure nothing has been adopted and the
    /// caller's state is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the download or upload fails.
    pub async fn persist(
        &self,
        local: &[Product],
        baseline: &HashSet<ProductId>,
    ) -> Result<Vec<Product>, StoreError> {
        let remote = self.load().await?;
        let merged = merge_catalogs(local, baseline, remote);

        // Pretty-printed for human inspection of the stored document.
        let bytes = serde_json::to_vec_pretty(&merged)?;
        self.store
            .upload(&self.bucket, &self.document, bytes, "application/json", true)
            .await?;

        Ok(merged)
    }
}

/// Parse the document body, recovering defensively to an empty list.
fn parse_document(bytes: &[u8]) -> Vec<Product> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Vec::new();
    }
    match serde_json::from_slice(bytes) {
        Ok(products) => products,
        Err(error) => {
            tracing::warn!(%error, "catalogue document is not valid JSON, treating as empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use crate::MemoryStore;

    use super::*;

    fn product(id: i64, name: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category: "Hogar".to_string(),
            price: Decimal::from(25),
            image: String::new(),
        }
    }

    #[tokio::test]
    async fn test_load_absent_document_is_empty() {
        let store = CatalogStore::new(MemoryStore::new());
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_blank_or_invalid_body_is_empty() {
        let memory = MemoryStore::new();
        let store = CatalogStore::new(memory.clone());

        for body in [b"   ".to_vec(), b"{not json".to_vec()] {
            memory
                .upload(CATALOG_BUCKET, CATALOG_DOCUMENT, body, "application/json", true)
                .await
                .unwrap();
            assert!(store.load().await.unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_persist_then_load_round_trips() {
        let store = CatalogStore::new(MemoryStore::new());
        let local = vec![product(1, "Taza"), product(2, "Plato")];

        let merged = store.persist(&local, &HashSet::new()).await.unwrap();
        assert_eq!(merged, local);

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, local);
    }

    #[tokio::test]
    async fn test_persisted_document_is_pretty_printed() {
        let memory = MemoryStore::new();
        let store = CatalogStore::new(memory.clone());
        store
            .persist(&[product(1, "Taza")], &HashSet::new())
            .await
            .unwrap();

        let bytes = memory
            .download(CATALOG_BUCKET, CATALOG_DOCUMENT)
            .await
            .unwrap()
            .unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains('\n'));
        assert!(text.contains("\"nombre\": \"Taza\""));
    }

    #[tokio::test]
    async fn test_persist_merges_against_current_remote() {
        let memory = MemoryStore::new();
        let store = CatalogStore::new(memory.clone());

        // Remote already holds a product from another session.
        store
            .persist(&[product(9, "Ajeno")], &HashSet::new())
            .await
            .unwrap();

        // This session never saw id 9 (empty baseline) and adds id 1.
        let merged = store
            .persist(&[product(1, "Taza")], &HashSet::new())
            .await
            .unwrap();

        let mut ids: Vec<i64> = merged.iter().map(|p| p.id.as_i64()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 9]);
    }
}
