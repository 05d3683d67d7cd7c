//! Prescription history report (HTML for the PDF renderer).

use std::fmt::Write;

use chrono::NaiveDate;

use crate::config::Letterhead;
use crate::models::{Medicine, Patient, Prescription, ProcedurePerformed, Vitals};
use crate::views::DateRange;

const STYLE: &str = "\
body { font-family: 'Roboto', Arial, sans-serif; color: #333; margin: 25px; font-size: 12px; }
.letterhead { text-align: center; border-bottom: 2px solid #009688; padding-bottom: 10px; margin-bottom: 20px; }
.letterhead h1 { color: #004D40; margin: 0; }
.letterhead p { margin: 2px 0; font-size: 11px; color: #78909C; white-space: pre-line; }
.patient-info { background-color: #F0F4F8; padding: 15px; border-radius: 8px; margin-bottom: 20px; border: 1px solid #e0e0e0; }
.patient-info p { margin: 4px 0; }
.rx-item { border: 1px solid #ddd; border-radius: 8px; margin-bottom: 15px; page-break-inside: avoid; overflow: hidden; }
.rx-header { background-color: #0096881A; color: #004D40; padding: 10px 15px; border-bottom: 1px solid #ddd; }
.rx-header h3, .rx-header p { margin: 0; }
.rx-body { padding: 15px; }
.vitals-header, .medicines-header { color: #009688; margin-top: 15px; margin-bottom: 8px; border-bottom: 1px solid #eee; padding-bottom: 4px; }
.vitals-container { display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 15px; }
.vital-pill { background-color: #f0f0f0; padding: 4px 8px; border-radius: 4px; font-size: 11px; }
table { width: 100%; border-collapse: collapse; }
th, td { border: 1px solid #e0e0e0; padding: 8px; text-align: left; }
th { background-color: #f5f5f5; font-weight: bold; }
.notes-section { margin-top: 15px; padding: 10px; background-color: #fffbe6; border: 1px solid #ffe58f; border-radius: 4px; font-style: italic; }
.footer { text-align: center; margin-top: 30px; font-size: 10px; color: #999; border-top: 1px solid #eee; padding-top: 10px; }
";

/// A patient's prescriptions over a date range, ready to print.
#[derive(Debug, Clone)]
pub struct HistoryReport<'a> {
    letterhead: &'a Letterhead,
    patient: &'a Patient,
    range: DateRange,
    prescriptions: Vec<&'a Prescription>,
    generated_on: NaiveDate,
}

impl<'a> HistoryReport<'a> {
    pub fn new(
        letterhead: &'a Letterhead,
        patient: &'a Patient,
        range: DateRange,
        prescriptions: Vec<&'a Prescription>,
        generated_on: NaiveDate,
    ) -> Self {
        Self {
            letterhead,
            patient,
            range,
            prescriptions,
            generated_on,
        }
    }

    /// Render the full HTML document.
    pub fn render(&self) -> String {
        let lh = self.letterhead;
        let mut html = String::new();
        html.push_str("<html><head><meta charset=\"utf-8\"><style>");
        html.push_str(STYLE);
        html.push_str("</style></head><body>");

        let _ = write!(
            html,
            "<div class=\"letterhead\"><h1>{}</h1><p>{} | Phone: {}</p></div>",
            escape_html(&lh.doctor_name),
            escape_html(&lh.address),
            escape_html(&lh.phone),
        );
        html.push_str("<h2>Prescription History</h2>");
        let _ = write!(
            html,
            "<div class=\"patient-info\">\
             <p><strong>Patient:</strong> {}</p>\
             <p><strong>Age:</strong> {}</p>\
             <p><strong>Gender:</strong> {}</p>\
             <p><strong>Report Period:</strong> {} to {}</p></div>",
            escape_html(&self.patient.name),
            escape_html(&self.patient.age),
            escape_html(&self.patient.gender),
            self.range.start_iso(),
            self.range.end_iso(),
        );

        for rx in &self.prescriptions {
            render_prescription(&mut html, rx);
        }

        let _ = write!(
            html,
            "<div class=\"footer\"><p>This is a computer-generated report. | Generated on: {}</p>\
             <p><strong>{}</strong></p></div>",
            self.generated_on.format("%d/%m/%Y"),
            escape_html(&lh.doctor_name),
        );
        html.push_str("</body></html>");
        html
    }
}

fn render_prescription(html: &mut String, rx: &Prescription) {
    let _ = write!(
        html,
        "<div class=\"rx-item\"><div class=\"rx-header\"><h3>Date: {}</h3>\
         <p><strong>Diagnosis:</strong> {}</p></div><div class=\"rx-body\">",
        display_date(&rx.date),
        escape_html(&rx.diagnosis),
    );
    render_vitals(html, &rx.vitals);
    render_medicines(html, &rx.medicines);
    render_procedures(html, &rx.procedures_performed);
    if !rx.notes.trim().is_empty() {
        let _ = write!(
            html,
            "<div class=\"notes-section\"><p><strong>Notes:</strong> {}</p></div>",
            escape_html(&rx.notes)
        );
    }
    html.push_str("</div></div>");
}

fn render_vitals(html: &mut String, vitals: &Vitals) {
    let recorded = vitals.labelled();
    if recorded.is_empty() {
        return;
    }
    html.push_str("<h4 class=\"vitals-header\">Vitals Recorded</h4><div class=\"vitals-container\">");
    for (label, value) in recorded {
        let _ = write!(
            html,
            "<div class=\"vital-pill\"><strong>{}:</strong> {}</div>",
            label,
            escape_html(value)
        );
    }
    html.push_str("</div>");
}

fn render_medicines(html: &mut String, medicines: &[Medicine]) {
    html.push_str(
        "<h4 class=\"medicines-header\">Medicines</h4><table><thead><tr>\
         <th>Medicine</th><th>Frequency</th><th>Duration</th><th>Instructions</th>\
         </tr></thead><tbody>",
    );
    for med in medicines {
        let instructions = if med.instructions.trim().is_empty() {
            "-"
        } else {
            med.instructions.as_str()
        };
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&med.label()),
            escape_html(&med.frequency),
            escape_html(&med.duration),
            escape_html(instructions),
        );
    }
    html.push_str("</tbody></table>");
}

fn render_procedures(html: &mut String, procedures: &[ProcedurePerformed]) {
    if procedures.is_empty() {
        return;
    }
    html.push_str(
        "<h4 class=\"medicines-header\">Procedures Performed</h4><table><thead><tr>\
         <th>Procedure</th><th>Cost (₹)</th></tr></thead><tbody>",
    );
    for p in procedures {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>₹{}</td></tr>",
            escape_html(&p.name),
            escape_html(&p.cost)
        );
    }
    html.push_str("</tbody></table>");
}

/// `YYYY-MM-DD` as `DD/MM/YYYY`; anything else is shown as stored.
fn display_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%d/%m/%Y").to_string(),
        Err(_) => escape_html(date),
    }
}

/// Escape text for HTML element content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClinicConfig;
    use crate::store::sample_snapshot;

    fn render_for(patient_id: &str) -> String {
        let snapshot = sample_snapshot();
        let config = ClinicConfig::default();
        let patient = snapshot.patient(patient_id).unwrap();
        let rows: Vec<&Prescription> = snapshot
            .prescriptions
            .iter()
            .filter(|rx| rx.patient_id == patient_id)
            .collect();
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
        );
        let today = NaiveDate::from_ymd_opt(2025, 12, 15).unwrap();
        HistoryReport::new(&config.letterhead, patient, range, rows, today).render()
    }

    #[test]
    fn test_report_sections() {
        let html = render_for("1");
        assert!(html.contains("<h1>Dr. Mansoor</h1>"));
        assert!(html.contains("<h2>Prescription History</h2>"));
        assert!(html.contains("<strong>Patient:</strong> Alice Johnson"));
        assert!(html.contains("<strong>Report Period:</strong> 2023-01-01 to 2023-12-31"));
        assert!(html.contains("<h3>Date: 18/11/2023</h3>"));
        assert!(html.contains("<strong>BP:</strong> 118/75"));
        assert!(html.contains("<td>Paracetamol 500mg (Tablet)</td>"));
        assert!(html.contains("<td>₹150</td>"));
        assert!(html.contains("<strong>Notes:</strong> Rest and Hydrate."));
        assert!(html.contains("Generated on: 15/12/2025"));
        assert_eq!(html.matches("class=\"rx-item\"").count(), 2);
    }

    #[test]
    fn test_procedures_table_only_when_present() {
        let html = render_for("2");
        assert!(!html.contains("Procedures Performed"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>Tom & \"Jerry\"</b>"),
            "&lt;b&gt;Tom &amp; &quot;Jerry&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_display_date_fallback() {
        assert_eq!(display_date("2023-10-01"), "01/10/2023");
        assert_eq!(display_date("yesterday"), "yesterday");
    }
}
