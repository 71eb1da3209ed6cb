//! Order composition: cart to WhatsApp deep link.
//!
//! An order is a pre-formatted text message opened against the `wa.me` deep
//! link scheme: one line per cart item (`name - quantity - subtotal`) and a
//! trailing total line. Prices are lempiras (`L.`).

use rust_decimal::Decimal;
use serde::Serialize;
use tiendita_core::Cart;

/// A composed order ready to hand to the messaging service.
#[derive(Debug, Clone, Serialize)]
pub struct OrderMessage {
    /// Plain message text (before URL encoding).
    #[serde(rename = "mensaje")]
    pub text: String,
    /// `https://wa.me/...` deep link with the encoded text.
    pub url: String,
    /// Order total.
    pub total: Decimal,
}

/// Compose the WhatsApp order message for a non-empty cart.
#[must_use]
pub fn compose_order(cart: &Cart, whatsapp_number: &str) -> OrderMessage {
    let mut text = String::from("🛍 *Nuevo pedido*\n");
    for line in cart.lines() {
        text.push_str(&format!(
            "{} - Cant: {} - Subtotal: L.{}\n",
            line.name,
            line.quantity,
            line.subtotal()
        ));
    }
    let total = cart.total();
    text.push_str(&format!("*TOTAL: L.{total}*"));

    let url = format!(
        "https://wa.me/{whatsapp_number}?text={}",
        urlencoding::encode(&text)
    );

    OrderMessage { text, url, total }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tiendita_core::{Product, ProductId};

    use super::*;

    fn cart() -> Cart {
        let taza = Product {
            id: ProductId::new(1),
            name: "Taza".to_string(),
            category: "Hogar".to_string(),
            price: Decimal::from(50),
            image: String::new(),
        };
        let plato = Product {
            id: ProductId::new(2),
            name: "Plato".to_string(),
            category: "Cocina".to_string(),
            price: Decimal::from(30),
            image: String::new(),
        };
        let mut cart = Cart::new();
        cart.add(&taza, 2);
        cart.add(&plato, 1);
        cart
    }

    #[test]
    fn test_message_lists_lines_and_total() {
        let order = compose_order(&cart(), "50493694250");
        assert_eq!(
            order.text,
            "🛍 *Nuevo pedido*\nTaza - Cant: 2 - Subtotal: L.100\nPlato - Cant: 1 - Subtotal: L.30\n*TOTAL: L.130*"
        );
        assert_eq!(order.total, Decimal::from(130));
    }

    #[test]
    fn test_url_targets_number_with_encoded_text() {
        let order = compose_order(&cart(), "50493694250");
        assert!(order.url.starts_with("https://wa.me/50493694250?text="));
        // The raw text must be URL-encoded into the link.
        assert!(!order.url.contains(' '));
        assert!(order.url.contains("Nuevo%20pedido"));
    }
}
