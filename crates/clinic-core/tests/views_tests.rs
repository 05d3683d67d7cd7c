//! History filter, stock status and export integration tests.

use chrono::NaiveDate;
use proptest::prelude::*;

use clinic_core::config::ClinicConfig;
use clinic_core::export::{share_history_pdf, DocumentRenderer, ExportError, ProcedureLedger};
use clinic_core::models::{InventoryItem, StockStatus};
use clinic_core::notice::Notice;
use clinic_core::store::{sample_snapshot, Store};
use clinic_core::views::{filter_by_range, DateRange, Dashboard};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_range_filter_over_sample() {
    let snapshot = sample_snapshot();

    let full = filter_by_range(
        &snapshot.prescriptions,
        &DateRange::new(ymd(2023, 1, 1), ymd(2023, 12, 31)),
    );
    let dates: Vec<_> = full.iter().map(|rx| rx.date.as_str()).collect();
    assert_eq!(dates, vec!["2023-11-18", "2023-10-01", "2023-11-05"]);

    let narrowed = filter_by_range(
        &snapshot.prescriptions,
        &DateRange::new(ymd(2023, 1, 1), ymd(2023, 10, 31)),
    );
    assert_eq!(narrowed.len(), 1);
    assert_eq!(narrowed[0].date, "2023-10-01");
}

#[test]
fn test_dashboard_follows_mutations() {
    let mut store = Store::seeded();
    store.adjust_stock("101", -115);
    store.add_inventory_item("Ibuprofen", "Tablet", "400mg").unwrap();

    let dashboard = Dashboard::from_snapshot(&store.snapshot());
    let low: Vec<_> = dashboard.low_stock.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(low, vec!["Paracetamol", "Amoxicillin", "Ibuprofen"]);
    let (shown, more) = dashboard.low_stock_preview();
    assert_eq!(shown.len(), 2);
    assert_eq!(more, 1);
}

struct FailingShare;

impl DocumentRenderer for FailingShare {
    fn print_to_file(&self, _html: &str) -> Result<String, String> {
        Ok("file:///tmp/report.pdf".to_string())
    }

    fn share(&self, _uri: &str, _mime_type: &str, _dialog_title: &str) -> Result<(), String> {
        Err("share sheet dismissed".to_string())
    }
}

#[test]
fn test_share_failure_maps_to_generic_notice() {
    let snapshot = sample_snapshot();
    let err = share_history_pdf(
        &FailingShare,
        &ClinicConfig::default(),
        snapshot.patient("1").unwrap(),
        &snapshot.prescriptions,
        &DateRange::new(ymd(2023, 1, 1), ymd(2023, 12, 31)),
        ymd(2025, 12, 15),
    )
    .unwrap_err();

    assert!(matches!(err, ExportError::Renderer(_)));
    let notice = Notice::from(&err);
    assert_eq!(notice.title, "Error");
    assert_eq!(notice.body, "Could not generate or share PDF.");
}

#[test]
fn test_ledger_after_prescription_save() {
    let mut store = Store::seeded();
    let rx1 = store.snapshot().prescription("rx1").unwrap().clone();
    store
        .save_prescription_on(
            clinic_core::store::PrescriptionDraft::edit(&rx1),
            ymd(2025, 12, 15),
        )
        .unwrap();

    let ledger = ProcedureLedger::from_records(&store.snapshot().procedures);
    assert_eq!(ledger.entries.len(), 4);
    assert_eq!(ledger.entries[0].procedure_id, "p01");
    assert_eq!(ledger.total_label, "₹ 1,750");
}

proptest! {
    #[test]
    fn prop_status_is_pure_threshold(stock in 0u32..1000) {
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
    fn prop_adjust_never_negative(start in 0u32..500, delta in -1000i64..1000) {
        let mut store = Store::new();
        let item: InventoryItem = store.add_inventory_item("Zinc", "Tablet", "20mg").unwrap();
        store.adjust_stock(&item.id, i64::from(start));

        let adjusted = store.adjust_stock(&item.id, delta).unwrap();
        let expected = (i64::from(start) + delta).max(0) as u32;
        prop_assert_eq!(adjusted.stock, expected);
        prop_assert_eq!(adjusted.status(), StockStatus::from_stock(expected));
    }
}
