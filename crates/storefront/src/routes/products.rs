//! Catalogue browsing handlers.
//!
//! Every handler loads the current document from the remote store, so the
//! public view always reflects the latest persisted catalogue. Filtering is
//! the in-memory scan from `tiendita_core::Catalog`; no index at this scale.

use axum::{Json, extract::Query, extract::State};
use serde::{Deserialize, Serialize};
use tiendita_core::{Catalog, PLACEHOLDER_IMAGE_URL, Product};
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// Sentinel filter value meaning "match any category".
pub const WILDCARD_ALL: &str = "all";

/// Query parameters for the product listing.
#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    /// Free-text search over name, category, and price.
    #[serde(default)]
    pub q: String,
    /// Exact category, or the wildcard-all sentinel.
    pub categoria: Option<String>,
}

/// Whether a request category means "all categories".
///
/// Accepts both sentinels in the wild: `all` (any case) and `Todas`.
fn is_wildcard(category: &str) -> bool {
    category.eq_ignore_ascii_case(WILDCARD_ALL) || category == "Todas"
}

/// Category card data for the home page.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryOverview {
    #[serde(rename = "categoria")]
    pub category: String,
    /// Number of products in the category.
    #[serde(rename = "productos")]
    pub product_count: usize,
    /// Image of the category's first product, used as the card cover.
    #[serde(rename = "imagen")]
    pub image: String,
}

/// List products, filtered by query and category.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> Result<Json<Vec<Product>>> {
    let catalog = Catalog::from_remote(state.catalog().load().await?);

    let category = query
        .categoria
        .as_deref()
        .filter(|c| !c.is_empty() && !is_wildcard(c));
    let products = catalog
        .filter(&query.q, category)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(products))
}

/// List distinct category names.
#[instrument(skip(state))]
pub async fn categories(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    let catalog = Catalog::from_remote(state.catalog().load().await?);
    Ok(Json(catalog.categories()))
}

/// Category cards for the home page: product count plus a cover image taken
/// from the first product of each category.
#[instrument(skip(state))]
pub async fn categories_overview(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryOverview>>> {
    let catalog = Catalog::from_remote(state.catalog().load().await?);

    let overview = catalog
        .categories()
        .into_iter()
        .map(|category| {
            let members: Vec<&Product> = catalog.filter("", Some(&category));
            let image = members
                .first()
                .map_or_else(|| PLACEHOLDER_IMAGE_URL.to_string(), |p| p.image.clone());
            CategoryOverview {
                category,
                product_count: members.len(),
                image,
            }
        })
        .collect();

    Ok(Json(overview))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_sentinels() {
        assert!(is_wildcard("all"));
        assert!(is_wildcard("ALL"));
        assert!(is_wildcard("Todas"));
        assert!(!is_wildcard("Hogar"));
        assert!(!is_wildcard("todas"));
    }
}
