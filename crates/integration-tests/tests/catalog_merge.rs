//! Multi-session catalogue merge scenarios.
//!
//! Two admin sessions edit the same remote document through independent
//! `CatalogStore` handles over a shared in-memory object store. The
//! merge-on-persist pipeline must keep one session's additions alive while
//! honoring the other session's deletions.

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

use tiendita_core::{Catalog, ProductId};
use tiendita_integration_tests::{product, sorted_ids};
use tiendita_store::{CatalogStore, MemoryStore};

#[tokio::test]
async fn test_concurrent_sessions_merge_additions_and_deletions() {
    let memory = MemoryStore::new();
    let session_a = CatalogStore::new(memory.clone());
    let session_b = CatalogStore::new(memory.clone());

    // Seed the shared document with products 1 and 2.
    let seed = vec![product(1, "Taza", "Hogar", 50), product(2, "Plato", "Cocina", 30)];
    session_a.persist(&seed, &HashSet::new()).await.unwrap();

    // Both sessions load the same snapshot.
    let mut catalog_a = Catalog::from_remote(session_a.load().await.unwrap());
    let catalog_b = Catalog::from_remote(session_b.load().await.unwrap());
    assert_eq!(catalog_a.len(), 2);

    // Session B adds product 4 and persists first.
    let mut local_b = catalog_b.clone();
    local_b.upsert(product(4, "Vaso", "Cocina", 15));
    let merged_b = session_b
        .persist(local_b.products(), local_b.baseline())
        .await
        .unwrap();
    assert_eq!(sorted_ids(&merged_b), vec![1, 2, 4]);

    // Session A, still on the old snapshot, deletes 2 and adds 3.
    catalog_a.remove(ProductId::new(2));
    catalog_a.upsert(product(3, "Olla", "Cocina", 120));
    let merged_a = session_a
        .persist(catalog_a.products(), catalog_a.baseline())
        .await
        .unwrap();

    // B's addition survives; A's deletion of 2 sticks.
    assert_eq!(sorted_ids(&merged_a), vec![1, 3, 4]);

    // The stored document agrees with what A adopted.
    let stored = session_b.load().await.unwrap();
    assert_eq!(sorted_ids(&stored), vec![1, 3, 4]);
}

#[tokio::test]
async fn test_edit_wins_over_stale_remote_copy() {
    let memory = MemoryStore::new();
    let store = CatalogStore::new(memory.clone());

    store
        .persist(&[product(1, "Taza", "Hogar", 50)], &HashSet::new())
        .await
        .unwrap();

    // Edit the price in a loaded session and persist.
    let mut catalog = Catalog::from_remote(store.load().await.unwrap());
    catalog.upsert(product(1, "Taza", "Hogar", 65));
    let merged = store
        .persist(catalog.products(), catalog.baseline())
        .await
        .unwrap();

    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].price, rust_decimal::Decimal::from(65));
}

#[tokio::test]
async fn test_reload_after_foreign_write_resets_baseline() {
    let memory = MemoryStore::new();
    let session = CatalogStore::new(memory.clone());
    let other = CatalogStore::new(memory.clone());

    session
        .persist(&[product(1, "Taza", "Hogar", 50)], &HashSet::new())
        .await
        .unwrap();

    let mut catalog = Catalog::from_remote(session.load().await.unwrap());

    // Another session replaces the document entirely.
    let foreign = vec![product(7, "Maceta", "Jardín", 80)];
    let remote_ids: HashSet<ProductId> =
        other.load().await.unwrap().iter().map(|p| p.id).collect();
    other.persist(&foreign, &remote_ids).await.unwrap();

    // Reloading adopts the foreign state; id 1 is gone and the baseline
    // now claims id 7, so a subsequent no-op persist changes nothing.
    catalog.replace_from_remote(session.load().await.unwrap());
    assert_eq!(sorted_ids(catalog.products()), vec![7]);

    let merged = session
        .persist(catalog.products(), catalog.baseline())
        .await
        .unwrap();
    assert_eq!(sorted_ids(&merged), vec![7]);
}

#[tokio::test]
async fn test_server_assigned_ids_skip_foreign_ids() {
    let memory = MemoryStore::new();
    let store = CatalogStore::new(memory.clone());

    store
        .persist(
            &[product(1, "Taza", "Hogar", 50), product(5, "Olla", "Cocina", 120)],
            &HashSet::new(),
        )
        .await
        .unwrap();

    let mut catalog = Catalog::from_remote(store.load().await.unwrap());
    let id = catalog.next_id();
    assert_eq!(id, ProductId::new(6));

    catalog.upsert(product(id.as_i64(), "Sartén", "Cocina", 90));
    let merged = store
        .persist(catalog.products(), catalog.baseline())
        .await
        .unwrap();
    assert_eq!(sorted_ids(&merged), vec![1, 5, 6]);
}
