//! Inventory operations.

use tracing::{debug, info};

use super::{require, Store, StoreError, StoreResult};
use crate::models::{InventoryItem, InventoryPatch};
use crate::notice::Notice;

impl Store {
    /// Add a new stock item with zero stock.
    pub fn add_inventory_item(
        &mut self,
        name: impl Into<String>,
        dosage: impl Into<String>,
        strength: impl Into<String>,
    ) -> StoreResult<InventoryItem> {
        let name = name.into();
        let strength = strength.into();
        if !require(&[&name, &strength]) {
            return Err(StoreError::MissingFields(
                "Please enter Medicine Name and Strength".into(),
            ));
        }

        let item = InventoryItem::new(name.trim().to_string(), dosage.into(), strength);
        let added = item.clone();
        self.update(move |s| s.inventory.push(added));

        info!(item_id = %item.id, "added inventory item");
        self.notify(Notice::success(
            "Added",
            format!("{} added to inventory", item.name),
        ));
        Ok(item)
    }

    /// Edit an item's name, strength or dosage form.
    pub fn update_inventory_item(&mut self, id: &str, patch: InventoryPatch) -> Option<InventoryItem> {
        let updated = self.update(|s| {
            let slot = s.inventory.iter_mut().find(|i| i.id == id)?;
            *slot = slot.patched(&patch);
            Some(slot.clone())
        })?;
        self.notify(Notice::success("Updated", "Medicine details updated"));
        Some(updated)
    }

    /// Move stock up or down. Stock never goes below zero.
    pub fn adjust_stock(&mut self, id: &str, delta: i64) -> Option<InventoryItem> {
        let item = self.update(|s| {
            let slot = s.inventory.iter_mut().find(|i| i.id == id)?;
            slot.stock = slot.adjusted_stock(delta);
            Some(slot.clone())
        })?;
        debug!(item_id = id, delta, stock = item.stock, status = item.status().as_str(), "stock adjusted");
        Some(item)
    }

    /// Remove a stock item.
    pub fn delete_inventory_item(&mut self, id: &str) -> bool {
        let removed = self.update(|s| {
            let before = s.inventory.len();
            s.inventory.retain(|i| i.id != id);
            s.inventory.len() != before
        });
        self.notify(Notice::info("Deleted", "Item removed from inventory."));
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StockStatus;

    #[test]
    fn test_add_item_starts_out_of_stock() {
        let mut store = Store::new();
        let item = store
            .add_inventory_item("Ibuprofen", "Tablet", "400mg")
            .unwrap();
        assert_eq!(item.status(), StockStatus::Out);
        assert_eq!(store.drain_notices()[0].body, "Ibuprofen added to inventory");
    }

    #[test]
    fn test_add_item_requires_strength() {
        let mut store = Store::new();
        assert!(store.add_inventory_item("Ibuprofen", "Tablet", "").is_err());
        assert!(store.snapshot().inventory.is_empty());
    }

    #[test]
    fn test_adjust_stock_floors_at_zero() {
        let mut store = Store::seeded();
        let item = store.adjust_stock("102", -10).unwrap();
        assert_eq!(item.stock, 0);
        assert_eq!(item.status(), StockStatus::Out);

        let item = store.adjust_stock("102", 15).unwrap();
        assert_eq!(item.status(), StockStatus::Low);
        assert!(store.adjust_stock("missing", 1).is_none());
    }

    #[test]
    fn test_update_item_keeps_stock() {
        let mut store = Store::seeded();
        let patch = InventoryPatch {
            strength: Some("650mg".into()),
            ..Default::default()
        };
        let item = store.update_inventory_item("101", patch).unwrap();
        assert_eq!(item.strength, "650mg");
        assert_eq!(item.stock, 120);
    }

    #[test]
    fn test_delete_item() {
        let mut store = Store::seeded();
        assert!(store.delete_inventory_item("103"));
        assert!(store.snapshot().inventory_item("103").is_none());
    }
}
