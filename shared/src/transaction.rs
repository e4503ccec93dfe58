//! Transaction history model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::CartLine;

/// Line snapshot inside a finalized transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionItem {
    pub name: String,
    pub quantity: i64,
    pub price: i64,
}

/// 已结账交易 - 结账确认时创建，此后不可变
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub date: DateTime<Utc>,
    pub items: Vec<TransactionItem>,
    /// Σ price × quantity at checkout time
    pub total: i64,
}

impl Transaction {
    /// Snapshot a non-empty cart into an immutable transaction record
    pub fn from_cart(cart: &[CartLine]) -> Self {
        let items: Vec<TransactionItem> = cart
            .iter()
            .map(|line| TransactionItem {
                name: line.name.clone(),
                quantity: line.quantity,
                price: line.price,
            })
            .collect();
        let total = items.iter().map(|i| i.price * i.quantity).sum();
        Self {
            date: Utc::now(),
            items,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cart_snapshots_lines_and_total() {
        let cart = vec![
            CartLine::new("Ayam Bakar", 2, 15000),
            CartLine::new("Nasi Putih", 3, 4000),
        ];
        let tx = Transaction::from_cart(&cart);
        assert_eq!(tx.items.len(), 2);
        assert_eq!(tx.total, 42000);
        assert_eq!(tx.items[0].name, "Ayam Bakar");
        assert_eq!(tx.items[0].quantity, 2);
    }
}
