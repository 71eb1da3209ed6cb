//! In-memory catalogue state.
//!
//! [`Catalog`] owns the ordered product list loaded from the remote document
//! plus the **baseline snapshot**: the set of ids the list contained the last
//! time it was loaded from (or persisted to) the store. The baseline is what
//! lets the merge distinguish "this session deleted X" from "another session
//! added X while we were editing" (see [`crate::merge`]).
//!
//! All operations here are pure and synchronous; the remote round-trips live
//! in `tiendita-store`.

use std::collections::{BTreeSet, HashSet};

use crate::{Product, ProductId};

/// The full ordered list of products considered available for sale.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    baseline: HashSet<ProductId>,
}

impl Catalog {
    /// Create an empty catalogue with an empty baseline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalogue from a freshly loaded remote list.
    ///
    /// The baseline snapshot is set to the ids of `products`.
    #[must_use]
    pub fn from_remote(products: Vec<Product>) -> Self {
        let baseline = products.iter().map(|p| p.id).collect();
        Self { products, baseline }
    }

    /// Replace the catalogue with a merged/reloaded remote list and reset the
    /// baseline.
    ///
    /// Called after a successful persist so the next read reflects concurrent
    /// additions, and after an explicit reload.
    pub fn replace_from_remote(&mut self, products: Vec<Product>) {
        self.baseline = products.iter().map(|p| p.id).collect();
        self.products = products;
    }

    /// The products in insertion order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Ids present the last time this catalogue was synchronized with the
    /// remote store.
    #[must_use]
    pub const fn baseline(&self) -> &HashSet<ProductId> {
        &self.baseline
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalogue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct non-empty categories, sorted for deterministic display.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        self.products
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| !c.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Filter by category and free-text query.
    ///
    /// `category` of `None` is the wildcard-all value; otherwise the match is
    /// exact-string, not substring. A non-empty `query` matches
    /// case-insensitively as a substring of the concatenated name, category,
    /// and price. Preserves catalogue order and does not mutate state.
    #[must_use]
    pub fn filter(&self, query: &str, category: Option<&str>) -> Vec<&Product> {
        let query = query.trim().to_lowercase();

        self.products
            .iter()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .filter(|p| {
                if query.is_empty() {
                    return true;
                }
                let haystack =
                    format!("{} {} {}", p.name, p.category, p.price).to_lowercase();
                haystack.contains(&query)
            })
            .collect()
    }

    /// Insert or replace a product by id.
    ///
    /// An existing entry is replaced in place (position preserved); a new id
    /// is appended. This keeps the id-uniqueness invariant: no sequence of
    /// upserts can produce two entries with the same id.
    pub fn upsert(&mut self, product: Product) {
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => *slot = product,
            None => self.products.push(product),
        }
    }

    /// Remove a product by id. No-op (not an error) if absent.
    ///
    /// Returns whether an entry was removed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        self.products.len() != before
    }

    /// Allocate the next product id.
    ///
    /// Monotonic over the current list and the baseline (`max + 1`, starting
    /// at 1), so ids deleted-but-still-remote in this session are never
    /// reissued before the next persist.
    #[must_use]
    pub fn next_id(&self) -> ProductId {
        let max = self
            .products
            .iter()
            .map(|p| p.id.as_i64())
            .chain(self.baseline.iter().map(ProductId::as_i64))
            .max()
            .unwrap_or(0);
        ProductId::new(max + 1)
    }
}
