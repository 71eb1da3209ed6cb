//! Baseline-aware id-keyed merge.
//!
//! Before every remote write the admin pipeline re-downloads the current
//! document and reconciles it with the session's local edits. The rules:
//!
//! - a local product whose id exists remotely overwrites that entry in place;
//! - a local product unknown to the remote list is appended;
//! - a remote product whose id is in the session's **baseline snapshot** but
//!   no longer in the local list was deleted by this session and is removed;
//! - a remote product whose id is outside the baseline was added concurrently
//!   by another session and is preserved.
//!
//! This is a last-writer-wins, id-scoped merge, not a CRDT: two concurrent
//! deletes, or a concurrent edit-and-delete of the same id, race and the
//! later upload wins. Acceptable for a single trusted admin operator;
//! documented rather than "fixed" because fixing it changes observable
//! behavior.

use std::collections::HashSet;

use crate::{Product, ProductId};

/// Merge the session's local list into a freshly downloaded remote list.
///
/// `baseline` is the set of ids the session held when it last synchronized
/// with the store. Remote order is preserved; local-only products are
/// appended in local order.
#[must_use]
pub fn merge_catalogs(
    local: &[Product],
    baseline: &HashSet<ProductId>,
    remote: Vec<Product>,
) -> Vec<Product> {
    let local_ids: HashSet<ProductId> = local.iter().map(|p| p.id).collect();

    // Drop the ids this session deleted; keep everything another session
    // added while we were editing.
    let mut merged: Vec<Product> = remote
        .into_iter()
        .filter(|p| local_ids.contains(&p.id) || !baseline.contains(&p.id))
        .collect();

    for product in local {
        match merged.iter_mut().find(|m| m.id == product.id) {
            Some(slot) => *slot = product.clone(),
            None => merged.push(product.clone()),
        }
    }

    merged
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn product(id: i64, name: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category: "General".to_string(),
            price: Decimal::from(10),
            image: String::new(),
        }
    }

    fn ids(products: &[Product]) -> Vec<i64> {
        products.iter().map(|p| p.id.as_i64()).collect()
    }

    #[test]
    fn test_merge_preserves_foreign_additions_and_applies_deletes() {
        // Session loaded [A=1, B=2], deleted B, added C=3. Meanwhile another
        // session added D=4 to the remote document.
        let baseline: HashSet<ProductId> =
            [ProductId::new(1), ProductId::new(2)].into_iter().collect();
        let local = vec![product(1, "A"), product(3, "C")];
        let remote = vec![product(1, "A"), product(2, "B"), product(4, "D")];

        let merged = merge_catalogs(&local, &baseline, remote);

        let mut got = ids(&merged);
        got.sort_unstable();
        assert_eq!(got, vec![1, 3, 4]);
        assert!(!merged.iter().any(|p| p.id == ProductId::new(2)));
    }

    #[test]
    fn test_merge_local_edit_overwrites_remote_entry_in_place() {
        let baseline: HashSet<ProductId> = [ProductId::new(1)].into_iter().collect();
        let local = vec![product(1, "A renombrado")];
        let remote = vec![product(1, "A"), product(2, "B ajeno")];

        let merged = merge_catalogs(&local, &baseline, remote);

        assert_eq!(ids(&merged), vec![1, 2]);
        assert_eq!(merged.first().unwrap().name, "A renombrado");
    }

    #[test]
    fn test_merge_into_empty_remote() {
        let local = vec![product(1, "A"), product(2, "B")];
        let merged = merge_catalogs(&local, &HashSet::new(), Vec::new());
        assert_eq!(ids(&merged), vec![1, 2]);
    }

    #[test]
    fn test_merge_with_no_local_changes_keeps_remote() {
        let baseline: HashSet<ProductId> =
            [ProductId::new(1), ProductId::new(2)].into_iter().collect();
        let local = vec![product(1, "A"), product(2, "B")];
        let remote = vec![product(1, "A"), product(2, "B"), product(3, "C ajeno")];

        let merged = merge_catalogs(&local, &baseline, remote);
        assert_eq!(ids(&merged), vec![1, 2, 3]);
    }

    #[test]
    fn test_merge_delete_everything_preserves_foreign_rows() {
        let baseline: HashSet<ProductId> =
            [ProductId::new(1), ProductId::new(2)].into_iter().collect();
        let remote = vec![product(1, "A"), product(2, "B"), product(9, "Nuevo ajeno")];

        let merged = merge_catalogs(&[], &baseline, remote);
        assert_eq!(ids(&merged), vec![9]);
    }

    #[test]
    fn test_merge_result_has_unique_ids() {
        let baseline: HashSet<ProductId> = [ProductId::new(1)].into_iter().collect();
        let local = vec![product(1, "A"), product(2, "B")];
        let remote = vec![product(1, "A vieja"), product(2, "B ajena")];

        let merged = merge_catalogs(&local, &baseline, remote);
        let mut got = ids(&merged);
        got.sort_unstable();
        got.dedup();
        assert_eq!(got.len(), merged.len());
    }
}
