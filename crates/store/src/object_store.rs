//! The object-store seam.

use std::future::Future;

use crate::StoreError;

/// Blob storage as Tiendita consumes it: download-by-name, create-or-replace
/// upload, and public URL resolution.
///
/// Methods return `impl Future + Send` rather than `async fn` so generic
/// callers (axum handlers in particular) keep `Send` futures.
pub trait ObjectStore: Send + Sync {
    /// Download an object. `Ok(None)` when the object does not exist.
    fn download(
        &self,
        bucket: &str,
        key: &str,
    ) -> impl Future<Output = Result<Option<Vec<u8>>, StoreError>> + Send;

    /// Upload an object. With `upsert` the object is created or replaced;
    /// without it an existing object is a conflict error.
    fn upload(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
        upsert: bool,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Resolve the public URL for a stored object.
    fn public_url(&self, bucket: &str, key: &str) -> String;
}
