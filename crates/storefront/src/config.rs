//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SUPABASE_URL` - Supabase project URL (e.g., <https://xyz.supabase.co>)
//! - `SUPABASE_ANON_KEY` - Supabase anon API key
//! - `WHATSAPP_NUMBER` - Destination number for order deep links (digits only,
//!   international format without `+`)
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL (default: <http://localhost:3000>)
//! - `CATALOG_BUCKET` - Bucket holding the catalogue document (default: productos)
//! - `CATALOG_DOCUMENT` - Catalogue document name (default: productos.json)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;
use tiendita_store::{CATALOG_BUCKET, CATALOG_DOCUMENT, SupabaseConfig};
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Supabase project connection settings
    pub supabase: SupabaseConfig,
    /// Bucket holding the catalogue document
    pub catalog_bucket: String,
    /// Catalogue document name
    pub catalog_document: String,
    /// WhatsApp number orders are sent to
    pub whatsapp_number: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("STOREFRONT_BASE_URL", "http://localhost:3000");

        let supabase = supabase_from_env()?;
        let catalog_bucket = get_env_or_default("CATALOG_BUCKET", CATALOG_BUCKET);
        let catalog_document = get_env_or_default("CATALOG_DOCUMENT", CATALOG_DOCUMENT);
        let whatsapp_number = get_required_env("WHATSAPP_NUMBER")?;

        Ok(Self {
            host,
            port,
            base_url,
            supabase,
            catalog_bucket,
            catalog_document,
            whatsapp_number,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Read and validate the Supabase connection settings.
pub(crate) fn supabase_from_env() -> Result<SupabaseConfig, ConfigError> {
    let base_url = get_required_env("SUPABASE_URL")?;
    Url::parse(&base_url)
        .map_err(|e| ConfigError::InvalidEnvVar("SUPABASE_URL".to_string(), e.to_string()))?;
    let api_key = SecretString::from(get_required_env("SUPABASE_ANON_KEY")?);

    Ok(SupabaseConfig { base_url, api_key })
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
