//! Integration tests for Tiendita.
//!
//! These tests exercise the catalogue pipeline end to end against the
//! in-memory object store, so they run with `cargo test` and need no
//! external services. Tests against a live Supabase project would follow
//! the same shape with a `SupabaseStore` built from the environment.
//!
//! # Test Categories
//!
//! - `catalog_merge` - Multi-session merge-on-persist scenarios
//! - `cart_flow` - Cart arithmetic over catalogue products

use rust_decimal::Decimal;
use tiendita_core::{Product, ProductId};

/// Build a product with the given id, name, and category.
#[must_use]
pub fn product(id: i64, name: &str, category: &str, price: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        category: category.to_string(),
        price: Decimal::from(price),
        image: format!("https://example.com/{id}.jpg"),
    }
}

/// Sorted ids of a product list, for order-insensitive assertions.
#[must_use]
pub fn sorted_ids(products: &[Product]) -> Vec<i64> {
    let mut ids: Vec<i64> = products.iter().map(|p| p.id.as_i64()).collect();
    ids.sort_unstable();
    ids
}
