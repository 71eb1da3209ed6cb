//! Supabase Storage REST client.
//!
//! Speaks the storage object API directly:
//!
//! - `GET  {base}/storage/v1/object/{bucket}/{key}` - download
//! - `POST {base}/storage/v1/object/{bucket}/{key}` - upload (`x-upsert`)
//! - `     {base}/storage/v1/object/public/{bucket}/{key}` - public URL
//!
//! Requests carry the project API key both as `apikey` and as a bearer
//! token, the same way the hosted JS client does.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use tracing::instrument;

use crate::{ObjectStore, StoreError};

/// Statuses the storage API uses for a missing object.
const NOT_FOUND_STATUSES: [u16; 2] = [404, 406];

/// Connection settings for a Supabase project.
#[derive(Clone)]
pub struct SupabaseConfig {
    /// Project base URL, e.g. `https://xyzcompany.supabase.co`.
    pub base_url: String,
    /// Project API key (anon key is sufficient for storage access).
    pub api_key: SecretString,
}

impl std::fmt::Debug for SupabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Client for Supabase Storage.
///
/// Cheaply cloneable via `Arc`; one instance is shared across all handlers.
#[derive(Clone)]
pub struct SupabaseStore {
    inner: Arc<SupabaseStoreInner>,
}

struct SupabaseStoreInner {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SupabaseStore {
    /// Create a new storage client.
    #[must_use]
    pub fn new(config: &SupabaseConfig) -> Self {
        Self {
            inner: Arc::new(SupabaseStoreInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.trim_end_matches('/').to_string(),
                api_key: config.api_key.expose_secret().to_string(),
            }),
        }
    }

    fn object_endpoint(&self, bucket: &str, key: &str) -> String {
        format!("{}/storage/v1/object/{bucket}/{key}", self.inner.base_url)
    }

    /// Read the body and build an [`StoreError::Unexpected`], logging a
    /// snippet for diagnostics.
    async fn unexpected_status(
        operation: &str,
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> StoreError {
        let body = response.text().await.unwrap_or_default();
        let snippet: String = body.chars().take(200).collect();
        tracing::error!(
            status = %status,
            body = %snippet,
            "storage {operation} returned non-success status"
        );
        StoreError::Unexpected {
            status: status.as_u16(),
            message: snippet,
        }
    }
}

impl ObjectStore for SupabaseStore {
    #[instrument(skip(self))]
    async fn download(&self, bucket: &str, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let response = self
            .inner
            .client
            .get(self.object_endpoint(bucket, key))
            .header("apikey", &self.inner.api_key)
            .bearer_auth(&self.inner.api_key)
            .send()
            .await?;

        let status = response.status();
        if NOT_FOUND_STATUSES.contains(&status.as_u16()) {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Self::unexpected_status("download", status, response).await);
        }

        let bytes = response.bytes().await?;
        Ok(Some(bytes.to_vec()))
    }

    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
        upsert: bool,
    ) -> Result<(), StoreError> {
        let response = self
            .inner
            .client
            .post(self.object_endpoint(bucket, key))
            .header("apikey", &self.inner.api_key)
            .bearer_auth(&self.inner.api_key)
            .header("Content-Type", content_type)
            .header("x-upsert", if upsert { "true" } else { "false" })
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::unexpected_status("upload", status, response).await);
        }
        Ok(())
    }

    fn public_url(&self, bucket: &str, key: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{bucket}/{key}",
            self.inner.base_url
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SupabaseStore {
        SupabaseStore::new(&SupabaseConfig {
            base_url: "https://proyecto.supabase.co/".to_string(),
            api_key: SecretString::from("k"),
        })
    }

    #[test]
    fn test_object_endpoint_trims_trailing_slash() {
        assert_eq!(
            store().object_endpoint("productos", "productos.json"),
            "https://proyecto.supabase.co/storage/v1/object/productos/productos.json"
        );
    }

    #[test]
    fn test_public_url_shape() {
        assert_eq!(
            store().public_url("images", "123_taza.jpg"),
            "https://proyecto.supabase.co/storage/v1/object/public/images/123_taza.jpg"
        );
    }

    #[test]
    fn test_config_debug_redacts_key() {
        let config = SupabaseConfig {
            base_url: "https://proyecto.supabase.co".to_string(),
            api_key: SecretString::from("super-secret-anon-key"),
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("super-secret-anon-key"));
    }
}
