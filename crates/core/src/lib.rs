//! Tiendita Core - Shared types and catalogue logic.
//!
//! This crate provides the common types and pure logic used across all
//! Tiendita components:
//! - `storefront` - Public catalogue and cart API
//! - `admin` - Product administration panel API
//! - `cli` - Command-line tools for catalogue management
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients, no storage access. The remote document layer lives in
//! `tiendita-store`; this crate answers every question that can be answered
//! from an in-memory catalogue or cart.
//!
//! # Modules
//!
//! - [`types`] - `Product`, type-safe IDs, and validated product input
//! - [`catalog`] - In-memory catalogue state: categories, filtering, upserts
//! - [`merge`] - Baseline-aware id-keyed merge used before every remote write
//! - [`cart`] - Client-local cart accumulation and totals

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod merge;
pub mod types;

pub use cart::{Cart, CartLine};
pub use catalog::Catalog;
pub use merge::merge_catalogs;
pub use types::*;
