//! In-memory object store.
//!
//! Backs the integration tests and local development runs. Clones share the
//! same underlying map, so two `CatalogStore`s over clones of one
//! `MemoryStore` behave like two sessions against one shared remote
//! document.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::{ObjectStore, StoreError};

type ObjectKey = (String, String);

/// Shared in-memory blob store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    objects: Arc<Mutex<HashMap<ObjectKey, Vec<u8>>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    /// Whether the store holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ObjectStore for MemoryStore {
    #[allow(clippy::unwrap_used)]
    async fn download(&self, bucket: &str, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let objects = self.objects.lock().unwrap();
        Ok(objects.get(&(bucket.to_string(), key.to_string())).cloned())
    }

    #[allow(clippy::unwrap_used)]
    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        _content_type: &str,
        upsert: bool,
    ) -> Result<(), StoreError> {
        let mut objects = self.objects.lock().unwrap();
        let object_key = (bucket.to_string(), key.to_string());
        if !upsert && objects.contains_key(&object_key) {
            return Err(StoreError::Unexpected {
                status: 409,
                message: format!("object already exists: {bucket}/{key}"),
            });
        }
        objects.insert(object_key, bytes);
        Ok(())
    }

    fn public_url(&self, bucket: &str, key: &str) -> String {
        format!("memory://{bucket}/{key}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_download_absent_is_none() {
        let store = MemoryStore::new();
        let got = store.download("productos", "productos.json").await.unwrap();
        assert!(got.is_none());
    }

    #[tokio::test]
    async fn test_upload_then_download() {
        let store = MemoryStore::new();
        store
            .upload("productos", "productos.json", b"[]".to_vec(), "application/json", true)
            .await
            .unwrap();
        let got = store.download("productos", "productos.json").await.unwrap();
        assert_eq!(got.unwrap(), b"[]");
    }

    #[tokio::test]
    async fn test_clones_share_objects() {
        let store = MemoryStore::new();
        let other = store.clone();
        store
            .upload("images", "a.jpg", vec![1, 2, 3], "image/jpeg", true)
            .await
            .unwrap();
        assert_eq!(other.len(), 1);
    }

    #[tokio::test]
    async fn test_upload_without_upsert_conflicts() {
        let store = MemoryStore::new();
        store
            .upload("images", "a.jpg", vec![1], "image/jpeg", false)
            .await
            .unwrap();
        let err = store
            .upload("images", "a.jpg", vec![2], "image/jpeg", false)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Unexpected { status: 409, .. }));
    }
}
