//! Cart line model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One line of the session cart
///
/// `name` always equals some `MenuItem::name`. A line never exists with
/// `quantity == 0`; it is removed instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    /// Opaque unique token, stable for the life of the line
    pub id: Uuid,
    pub name: String,
    pub quantity: i64,
    /// Unit price in Rupiah, copied from the menu at insert time
    pub price: i64,
}

impl CartLine {
    pub fn new(name: impl Into<String>, quantity: i64, price: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            quantity,
            price,
        }
    }

    pub fn line_total(&self) -> i64 {
        self.price * self.quantity
    }
}

/// Running total of a cart: Σ price × quantity
pub fn cart_total(cart: &[CartLine]) -> i64 {
    cart.iter().map(CartLine::line_total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_total() {
        let cart = vec![
            CartLine::new("Ayam Bakar", 2, 15000),
            CartLine::new("Es Teh Manis", 1, 5000),
        ];
        assert_eq!(cart_total(&cart), 35000);
    }

    #[test]
    fn test_cart_total_empty() {
        assert_eq!(cart_total(&[]), 0);
    }
}
