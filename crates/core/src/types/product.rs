//! The `Product` wire type and validated admin input.
//!
//! The persisted catalogue document (`productos.json`) is a JSON array of
//! objects with Spanish field names: `{id, nombre, categoria, precio,
//! imagen}`. Rust field names stay English; serde renames keep the document
//! format byte-compatible with what existing catalogues already contain.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ProductId;

/// Image URL used when a product has no image of its own.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150";

fn placeholder_image() -> String {
    PLACEHOLDER_IMAGE_URL.to_string()
}

/// A catalogue product as persisted in the remote document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique across the catalogue.
    pub id: ProductId,
    /// Display name; non-empty.
    #[serde(rename = "nombre")]
    pub name: String,
    /// May be empty, in which case the product is excluded from
    /// category-derived facets.
    #[serde(rename = "categoria", default)]
    pub category: String,
    /// Non-negative price in lempiras.
    #[serde(rename = "precio")]
    pub price: Decimal,
    /// Public image URL; defaults to a placeholder when absent.
    #[serde(rename = "imagen", default = "placeholder_image")]
    pub image: String,
}

/// Validation failures for admin product input.
///
/// These are caught before the mutation pipeline runs and surfaced inline to
/// the admin form; they never reach the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name is empty after trimming.
    #[error("el nombre es obligatorio")]
    EmptyName,

    /// Category is empty after trimming.
    #[error("la categoría es obligatoria")]
    EmptyCategory,

    /// Price is not a valid number.
    #[error("precio inválido: {0}")]
    InvalidPrice(String),

    /// Price is negative.
    #[error("el precio no puede ser negativo")]
    NegativePrice,
}

/// Raw product input from the admin form or API.
///
/// Field names mirror the wire format. Run [`ProductInput::validate`] before
/// handing the data to the mutation pipeline, which assumes already-validated
/// input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductInput {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "precio")]
    pub price: Decimal,
    #[serde(rename = "imagen", default)]
    pub image: Option<String>,
}

/// Product input that has passed validation but has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedProduct {
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub image: String,
}

impl ProductInput {
    /// Validate the input: name and category required non-empty after
    /// trimming, price non-negative, missing/blank image replaced with the
    /// placeholder URL.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing the first failing field.
    pub fn validate(self) -> Result<ValidatedProduct, ValidationError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let category = self.category.trim().to_string();
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }

        if self.price.is_sign_negative() {
            return Err(ValidationError::NegativePrice);
        }

        let image = match self.image {
            Some(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => placeholder_image(),
        };

        Ok(ValidatedProduct {
            name,
            category,
            price: self.price,
            image,
        })
    }
}

impl ValidatedProduct {
    /// Attach an id, producing a persistable [`Product`].
    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            price: self.price,
            image: self.image,
        }
    }
}

/// Parse a price from form text.
///
/// Used where the price arrives as a raw string (CLI seeding, form-encoded
/// admin input) rather than a JSON number.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidPrice`] when the text is not a number
/// and [`ValidationError::NegativePrice`] when it is below zero.
pub fn parse_price(raw: &str) -> Result<Decimal, ValidationError> {
    let price: Decimal = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidPrice(raw.trim().to_string()))?;
    if price.is_sign_negative() {
        return Err(ValidationError::NegativePrice);
    }
    Ok(price)
}
