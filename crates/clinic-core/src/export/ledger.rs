//! Procedure ledger export for accounting.

use serde::{Deserialize, Serialize};

use super::ExportResult;
use crate::models::ProcedureRecord;
use crate::views::{format_inr, total_revenue};

/// Every procedure record with its revenue total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcedureLedger {
    /// Export timestamp
    pub exported_at: String,
    /// Ledger lines
    pub entries: Vec<LedgerEntry>,
    /// Sum of parsed costs
    pub total: f64,
    /// Total formatted as rupees
    pub total_label: String,
}

/// Single ledger line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub procedure_id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub procedure_name: String,
    pub date: String,
    /// Cost as entered
    pub cost: String,
    /// Parsed cost (0 when unparseable)
    pub amount: f64,
}

impl ProcedureLedger {
    /// Build a ledger from procedure records, keeping their order.
    pub fn from_records(records: &[ProcedureRecord]) -> Self {
        let entries = records
            .iter()
            .map(|r| LedgerEntry {
                procedure_id: r.id.clone(),
                patient_id: r.patient_id.clone(),
                patient_name: r.patient_name.clone(),
                procedure_name: r.procedure_name.clone(),
                date: r.date.clone(),
                cost: r.cost.clone(),
                amount: r.cost_amount(),
            })
            .collect();
        let total = total_revenue(records);

        Self {
            exported_at: chrono::Utc::now().to_rfc3339(),
            entries,
            total,
            total_label: format_inr(total),
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> ExportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Export to CSV format.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();

        csv.push_str("procedure_id,patient_id,patient_name,procedure_name,date,cost,amount\n");

        for entry in &self.entries {
            csv.push_str(&format!(
                "{},{},{},{},{},{},{}\n",
                escape_csv(&entry.procedure_id),
                escape_csv(&entry.patient_id),
                escape_csv(&entry.patient_name),
                escape_csv(&entry.procedure_name),
                escape_csv(&entry.date),
                escape_csv(&entry.cost),
                entry.amount,
            ));
        }

        csv
    }
}

/// Quote a CSV field when it contains a separator, quote or newline.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
