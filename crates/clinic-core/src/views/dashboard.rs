//! Home screen summary.

use serde::Serialize;

use super::revenue::{format_inr, total_revenue};
use crate::models::{InventoryItem, StockStatus};
use crate::store::Snapshot;

/// Low-stock items shown on the home screen before "and N more".
const LOW_STOCK_PREVIEW: usize = 2;

/// Counts and alerts for the home screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub patients: usize,
    pub inventory: usize,
    pub appointments: usize,
    /// Excludes the "None" template
    pub templates: usize,
    pub procedures: usize,
    /// Every item whose status is not Good
    pub low_stock: Vec<InventoryItem>,
    pub revenue: f64,
    pub revenue_label: String,
}

impl Dashboard {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let revenue = total_revenue(&snapshot.procedures);
        Self {
            patients: snapshot.patients.len(),
            inventory: snapshot.inventory.len(),
            appointments: snapshot.appointments.len(),
            templates: snapshot.templates.iter().filter(|t| !t.is_sentinel()).count(),
            procedures: snapshot.procedures.len(),
            low_stock: snapshot
                .inventory
                .iter()
                .filter(|i| i.status() != StockStatus::Good)
                .cloned()
                .collect(),
            revenue,
            revenue_label: format_inr(revenue),
        }
    }

    /// The first low-stock items and how many are left over.
    pub fn low_stock_preview(&self) -> (&[InventoryItem], usize) {
        let shown = self.low_stock.len().min(LOW_STOCK_PREVIEW);
        (&self.low_stock[..shown], self.low_stock.len() - shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::sample_snapshot;

    #[test]
    fn test_sample_dashboard() {
        let dashboard = Dashboard::from_snapshot(&sample_snapshot());
        assert_eq!(dashboard.patients, 3);
        assert_eq!(dashboard.inventory, 4);
        assert_eq!(dashboard.appointments, 2);
        assert_eq!(dashboard.templates, 2);
        assert_eq!(dashboard.procedures, 3);
        assert_eq!(dashboard.revenue_label, "₹ 1,600");

        let (shown, more) = dashboard.low_stock_preview();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].name, "Amoxicillin");
        assert_eq!(more, 0);
    }

    #[test]
    fn test_low_stock_preview_overflow() {
        let mut snapshot = sample_snapshot();
        for item in &mut snapshot.inventory {
            item.stock = 3;
        }
        let dashboard = Dashboard::from_snapshot(&snapshot);
        let (shown, more) = dashboard.low_stock_preview();
        assert_eq!(shown.len(), 2);
        assert_eq!(more, 2);
    }
}
