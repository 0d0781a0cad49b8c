//! Cart line item.

use catalog::Product;
use common::Money;
use serde::{Deserialize, Serialize};

/// One line of a cart: a product and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// The product, denormalized at add time.
    pub product: Product,

    /// Quantity in the cart.
    ///
    /// Normally at least 1; `set_quantity` may store 0 without removing the
    /// line (historical behavior, left to the caller to guard).
    pub quantity: u32,
}

impl CartItem {
    /// Creates a cart item.
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// Returns the total price for this line (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.product.price.multiply(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::Money;

    fn widget() -> Product {
        Product::new(1u64, "Widget", Money::from_cents(1000), "Testing", 10)
    }

    #[test]
    fn line_total_multiplies_price_by_quantity() {
        let item = CartItem::new(widget(), 3);
        assert_eq!(item.line_total().cents(), 3000);
    }

    #[test]
    fn zero_quantity_line_totals_zero() {
        let item = CartItem::new(widget(), 0);
        assert_eq!(item.line_total().cents(), 0);
    }

    #[test]
    fn serialization_round_trip() {
        let item = CartItem::new(widget(), 2);
        let json = serde_json::to_string(&item).unwrap();
        let back: CartItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, back);
    }
}
