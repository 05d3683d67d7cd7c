//! Report, share and ledger exports.

mod history;
mod id_card;
mod ledger;

pub use history::*;
pub use id_card::*;
pub use ledger::*;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::ClinicConfig;
use crate::models::{Patient, Prescription};
use crate::views::{patient_history, DateRange, HistoryMode};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No prescriptions in the selected date range")]
    NothingToExport,

    #[error("Renderer failed: {0}")]
    Renderer(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ExportResult<T> = Result<T, ExportError>;

/// Device print and share services.
pub trait DocumentRenderer {
    /// Render HTML to a file and return its URI.
    fn print_to_file(&self, html: &str) -> Result<String, String>;

    /// Open the share sheet for a file.
    fn share(&self, uri: &str, mime_type: &str, dialog_title: &str) -> Result<(), String>;
}

pub const PDF_MIME_TYPE: &str = "application/pdf";
pub const HISTORY_SHARE_TITLE: &str = "Share Prescription History";

/// Render a patient's prescription history in `range` to PDF and share it.
///
/// Every prescription in range is included, not just the recent ones.
/// Returns the URI of the rendered file.
pub fn share_history_pdf(
    renderer: &dyn DocumentRenderer,
    config: &ClinicConfig,
    patient: &Patient,
    prescriptions: &[Prescription],
    range: &DateRange,
    generated_on: NaiveDate,
) -> ExportResult<String> {
    let rows = patient_history(prescriptions, &patient.id, range, HistoryMode::All);
    if rows.is_empty() {
        return Err(ExportError::NothingToExport);
    }

    let html = HistoryReport::new(&config.letterhead, patient, *range, rows, generated_on).render();
    let uri = renderer.print_to_file(&html).map_err(|e| {
        warn!("print failed: {}", e);
        ExportError::Renderer(e)
    })?;
    renderer
        .share(&uri, PDF_MIME_TYPE, HISTORY_SHARE_TITLE)
        .map_err(|e| {
            warn!("share failed: {}", e);
            ExportError::Renderer(e)
        })?;

    info!(patient_id = %patient.id, uri = %uri, "shared history report");
    Ok(uri)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::sample_snapshot;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingRenderer {
        fail_print: bool,
        printed: RefCell<Vec<String>>,
        shared: RefCell<Vec<(String, String, String)>>,
    }

    impl DocumentRenderer for RecordingRenderer {
        fn print_to_file(&self, html: &str) -> Result<String, String> {
            if self.fail_print {
                return Err("no printer".into());
            }
            self.printed.borrow_mut().push(html.to_string());
            Ok("file:///cache/history.pdf".into())
        }

        fn share(&self, uri: &str, mime_type: &str, dialog_title: &str) -> Result<(), String> {
            self.shared
                .borrow_mut()
                .push((uri.into(), mime_type.into(), dialog_title.into()));
            Ok(())
        }
    }

    fn year_2023() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
        )
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 15).unwrap()
    }

    #[test]
    fn test_share_history() {
        let snapshot = sample_snapshot();
        let renderer = RecordingRenderer::default();
        let uri = share_history_pdf(
            &renderer,
            &ClinicConfig::default(),
            snapshot.patient("1").unwrap(),
            &snapshot.prescriptions,
            &year_2023(),
            today(),
        )
        .unwrap();

        assert_eq!(uri, "file:///cache/history.pdf");
        let printed = renderer.printed.borrow();
        assert!(printed[0].contains("Mild Fever &amp; Headache"));
        assert!(printed[0].contains("Common Cold"));
        assert!(!printed[0].contains("Hypertension Check"));
        assert_eq!(
            renderer.shared.borrow()[0],
            (uri, PDF_MIME_TYPE.to_string(), HISTORY_SHARE_TITLE.to_string())
        );
    }

    #[test]
    fn test_empty_range() {
        let snapshot = sample_snapshot();
        let renderer = RecordingRenderer::default();
        let result = share_history_pdf(
            &renderer,
            &ClinicConfig::default(),
            snapshot.patient("3").unwrap(),
            &snapshot.prescriptions,
            &year_2023(),
            today(),
        );
        assert!(matches!(result, Err(ExportError::NothingToExport)));
        assert!(renderer.printed.borrow().is_empty());
    }

    #[test]
    fn test_renderer_failure() {
        let snapshot = sample_snapshot();
        let renderer = RecordingRenderer {
            fail_print: true,
            ..Default::default()
        };
        let result = share_history_pdf(
            &renderer,
            &ClinicConfig::default(),
            snapshot.patient("1").unwrap(),
            &snapshot.prescriptions,
            &year_2023(),
            today(),
        );
        assert!(matches!(result, Err(ExportError::Renderer(_))));
        assert!(renderer.shared.borrow().is_empty());
    }
}
