//! Shared type definitions.
//!
//! # Modules
//!
//! - [`id`] - Newtype ID wrappers (see the `define_id!` macro)
//! - [`product`] - The `Product` wire type and validated admin input

pub mod id;
pub mod product;

pub use id::ProductId;
pub use product::{
    PLACEHOLDER_IMAGE_URL, Product, ProductInput, ValidatedProduct, ValidationError, parse_price,
};
