//! Client-local cart accumulation.
//!
//! The cart never touches the remote store: lines are created from a
//! name/price snapshot taken at add-time, so later catalogue edits do not
//! retroactively change a cart. It is discarded with the session.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Product, ProductId};

/// One cart line: a product snapshot plus a quantity.
///
/// `id` is a weak reference to the catalogue; the cart does not re-validate
/// that the product still exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: Decimal,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
}

impl CartLine {
    /// Line subtotal: `quantity * price`.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// The cart: at most one line per product id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of items across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Add `quantity` of a product.
    ///
    /// An existing line for the same id has its quantity incremented; a new
    /// line snapshots the product's current name and price. Adding zero is a
    /// no-op.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.lines.iter_mut().find(|l| l.id == product.id) {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(CartLine {
                id: product.id,
                name: product.name.clone(),
                price: product.price,
                quantity,
            }),
        }
    }

    /// Replace a line's quantity.
    ///
    /// Setting zero removes the line (negative quantities are
    /// unrepresentable). No-op if the id has no line.
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.quantity = quantity;
        }
    }

    /// Remove the line for `id`. No-op (not an error) if absent.
    pub fn remove(&mut self, id: ProductId) {
        self.lines.retain(|l| l.id != id);
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `quantity * price` over all lines, recomputed on every call.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category: "Hogar".to_string(),
            price: Decimal::from(price),
            image: String::new(),
        }
    }

    #[test]
    fn test_add_sums_quantities_for_same_id() {
        let taza = product(1, "Taza", 50);
        let mut cart = Cart::new();
        cart.add(&taza, 2);
        cart.add(&taza, 3);

        assert_eq!(cart.lines().len(), 1);
        let line = cart.lines().first().unwrap();
        assert_eq!(line.quantity, 5);
        assert_eq!(cart.total(), Decimal::from(250));
    }

    #[test]
    fn test_add_snapshots_price_at_add_time() {
        let mut taza = product(1, "Taza", 50);
        let mut cart = Cart::new();
        cart.add(&taza, 1);

        // A later catalogue price change must not update the cart.
        taza.price = Decimal::from(80);
        assert_eq!(cart.total(), Decimal::from(50));
    }

    #[test]
    fn test_total_is_exact_sum_of_subtotals() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Taza", 50), 2);
        cart.add(&product(2, "Plato", 30), 3);

        let expected: Decimal = cart.lines().iter().map(CartLine::subtotal).sum();
        assert_eq!(cart.total(), expected);
        assert_eq!(cart.total(), Decimal::from(190));
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_set_quantity_replaces() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Taza", 50), 2);
        cart.set_quantity(ProductId::new(1), 7);
        assert_eq!(cart.lines().first().unwrap().quantity, 7);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Taza", 50), 2);
        cart.set_quantity(ProductId::new(1), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Taza", 50), 2);
        cart.set_quantity(ProductId::new(99), 3);
        assert_eq!(cart.lines().first().unwrap().quantity, 2);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Taza", 50), 1);
        cart.remove(ProductId::new(1));
        cart.remove(ProductId::new(1));
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Taza", 50), 1);
        cart.add(&product(2, "Plato", 30), 1);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_zero_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Taza", 50), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_session_round_trip() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Taza", 50), 2);
        let json = serde_json::to_string(&cart).unwrap();
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
    }
}
