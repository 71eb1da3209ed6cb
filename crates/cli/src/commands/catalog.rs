//! Catalogue inspection and seeding against the remote document store.

use std::collections::HashSet;
use std::path::Path;

use secrecy::SecretString;
use tracing::info;

use tiendita_core::{Product, ProductId};
use tiendita_store::{CATALOG_BUCKET, CATALOG_DOCUMENT, CatalogStore, SupabaseConfig, SupabaseStore};

/// Download and print the current catalogue document.
///
/// # Errors
///
/// Returns an error if environment variables are missing or the download
/// fails.
#[allow(clippy::print_stdout)] // The document dump is this command's output
pub async fn show() -> Result<(), Box<dyn std::error::Error>> {
    let store = catalog_store_from_env()?;

    let products = store.load().await?;
    info!(count = products.len(), "catalogue downloaded");

    println!("{}", serde_json::to_string_pretty(&products)?);
    Ok(())
}

/// Seed the remote catalogue from a local JSON file.
///
/// With `merge` the file's products are merged into the existing document
/// (existing entries with other ids survive); without it the document is
/// replaced wholesale.
///
/// # Errors
///
/// Returns an error if environment variables are missing, the file cannot be
/// read or parsed, the file contains duplicate ids, or the upload fails.
pub async fn seed(file_path: &str, merge: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = catalog_store_from_env()?;

    let path = Path::new(file_path);
    if !path.exists() {
        return Err(format!("File not found: {file_path}").into());
    }

    info!(path = %file_path, "Loading products from file");
    let content = tokio::fs::read_to_string(path).await?;
    let products: Vec<Product> = serde_json::from_str(&content)?;

    let mut seen: HashSet<ProductId> = HashSet::new();
    for product in &products {
        if !seen.insert(product.id) {
            return Err(format!("Duplicate product id in file: {}", product.id).into());
        }
    }
    info!(count = products.len(), "Parsed and validated product list");

    // A replace seed claims every remote id as its baseline, so entries not
    // in the file are treated as deletions; a merge seed claims none.
    let baseline: HashSet<ProductId> = if merge {
        HashSet::new()
    } else {
        store.load().await?.iter().map(|p| p.id).collect()
    };

    let merged = store.persist(&products, &baseline).await?;
    info!(count = merged.len(), merge, "Catalogue seeded");

    Ok(())
}

/// Build the catalogue store from environment variables.
///
/// Uses the same variables as the server binaries: `SUPABASE_URL`,
/// `SUPABASE_ANON_KEY`, with `CATALOG_BUCKET`/`CATALOG_DOCUMENT` optional.
fn catalog_store_from_env()
-> Result<CatalogStore<SupabaseStore>, Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let base_url = std::env::var("SUPABASE_URL").map_err(|_| "SUPABASE_URL not set")?;
    let api_key = std::env::var("SUPABASE_ANON_KEY")
        .map(SecretString::from)
        .map_err(|_| "SUPABASE_ANON_KEY not set")?;

    let bucket =
        std::env::var("CATALOG_BUCKET").unwrap_or_else(|_| CATALOG_BUCKET.to_string());
    let document =
        std::env::var("CATALOG_DOCUMENT").unwrap_or_else(|_| CATALOG_DOCUMENT.to_string());

    let supabase = SupabaseStore::new(&SupabaseConfig { base_url, api_key });
    Ok(CatalogStore::with_location(supabase, &bucket, &document))
}
