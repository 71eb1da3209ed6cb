//! Tiendita Store - remote object-store layer.
//!
//! Every "backend" operation in Tiendita is a call into a hosted storage
//! service: the whole catalogue is one JSON document (`productos.json`) in a
//! bucket, and product images are blobs in a second bucket. This crate owns
//! that boundary:
//!
//! - [`ObjectStore`] - the download/upload/public-URL seam
//! - [`SupabaseStore`] - the Supabase Storage REST implementation
//! - [`MemoryStore`] - in-memory implementation for tests and local runs
//! - [`CatalogStore`] - catalogue document load and merge-on-persist
//! - [`images`] - image upload with sanitized, collision-avoiding names
//!
//! # Error handling
//!
//! An absent document is not an error (`download` returns `Ok(None)`, a load
//! yields an empty catalogue). Everything else surfaces as [`StoreError`] so
//! callers can report it distinctly from validation failures.

#![cfg_attr(not(test), forbid(unsafe_code))]

mod catalog_store;
mod error;
pub mod images;
mod memory;
mod object_store;
mod supabase;

pub use catalog_store::{CATALOG_BUCKET, CATALOG_DOCUMENT, CatalogStore};
pub use error::StoreError;
pub use images::IMAGE_BUCKET;
pub use memory::MemoryStore;
pub use object_store::ObjectStore;
pub use supabase::{SupabaseConfig, SupabaseStore};
