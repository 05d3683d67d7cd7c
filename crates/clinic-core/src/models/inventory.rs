//! Inventory models.

use serde::{Deserialize, Serialize};

/// Stock classification derived from the stock count.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StockStatus {
    Out,
    Critical,
    Low,
    Good,
}

impl StockStatus {
    /// Classify a stock count: 0 → Out, <10 → Critical, <20 → Low, else Good.
    pub fn from_stock(stock: u32) -> Self {
        match stock {
            0 => StockStatus::Out,
            1..=9 => StockStatus::Critical,
            10..=19 => StockStatus::Low,
            _ => StockStatus::Good,
        }
    }

    /// Display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Out => "Out",
            StockStatus::Critical => "Critical",
            StockStatus::Low => "Low",
            StockStatus::Good => "Good",
        }
    }
}

/// A medicine or consumable held in stock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryItem {
    /// Generated identifier
    pub id: String,
    /// Item name
    pub name: String,
    /// Strength (e.g., "250mg/5ml", "N/A")
    pub strength: String,
    /// Dosage form / unit (e.g., "Tablet", "Piece")
    pub dosage: String,
    /// Units in stock
    pub stock: u32,
}

/// Editable inventory fields. Stock changes go through stock adjustment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InventoryPatch {
    pub name: Option<String>,
    pub strength: Option<String>,
    pub dosage: Option<String>,
}

impl InventoryItem {
    /// Create a new item with no stock.
    pub fn new(name: String, dosage: String, strength: String) -> Self {
        Self {
            id: super::new_id("inv"),
            name,
            strength,
            dosage,
            stock: 0,
        }
    }

    /// Current stock status.
    pub fn status(&self) -> StockStatus {
        StockStatus::from_stock(self.stock)
    }

    /// Stock after applying a signed delta, floored at zero.
    pub fn adjusted_stock(&self, delta: i64) -> u32 {
        let next = (i64::from(self.stock) + delta).max(0);
        u32::try_from(next).unwrap_or(u32::MAX)
    }

    /// Apply an edit patch.
    pub fn patched(&self, patch: &InventoryPatch) -> Self {
        Self {
            id: self.id.clone(),
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            strength: patch.strength.clone().unwrap_or_else(|| self.strength.clone()),
            dosage: patch.dosage.clone().unwrap_or_else(|| self.dosage.clone()),
            stock: self.stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_status_thresholds() {
        assert_eq!(StockStatus::from_stock(0), StockStatus::Out);
        assert_eq!(StockStatus::from_stock(1), StockStatus::Critical);
        assert_eq!(StockStatus::from_stock(9), StockStatus::Critical);
        assert_eq!(StockStatus::from_stock(10), StockStatus::Low);
        assert_eq!(StockStatus::from_stock(19), StockStatus::Low);
        assert_eq!(StockStatus::from_stock(20), StockStatus::Good);
        assert_eq!(StockStatus::from_stock(120), StockStatus::Good);
    }

    #[test]
    fn test_new_item_is_out_of_stock() {
        let item = InventoryItem::new("Ibuprofen".into(), "Tablet".into(), "400mg".into());
        assert_eq!(item.stock, 0);
        assert_eq!(item.status(), StockStatus::Out);
    }

    #[test]
    fn test_patch_keeps_stock() {
        let mut item = InventoryItem::new("Ibuprofen".into(), "Tablet".into(), "400mg".into());
        item.stock = 12;
        let patched = item.patched(&InventoryPatch {
            strength: Some("200mg".into()),
            ..Default::default()
        });
        assert_eq!(patched.strength, "200mg");
        assert_eq!(patched.name, "Ibuprofen");
        assert_eq!(patched.stock, 12);
    }

    proptest! {
        #[test]
        fn prop_status_matches_thresholds(stock in 0u32..10_000) {
            let expected = if stock == 0 {
                StockStatus::Out
            } else if stock < 10 {
                StockStatus::Critical
            } else if stock < 20 {
                StockStatus::Low
            } else {
                StockStatus::Good
            };
            prop_assert_eq!(StockStatus::from_stock(stock), expected);
        }

        #[test]
        fn prop_adjusted_stock_never_negative(stock in 0u32..1_000, delta in -2_000i64..2_000) {
            let mut item = InventoryItem::new("X".into(), "Tablet".into(), "1mg".into());
            item.stock = stock;
            let next = item.adjusted_stock(delta);
            prop_assert_eq!(i64::from(next), (i64::from(stock) + delta).max(0));
        }
    }
}
