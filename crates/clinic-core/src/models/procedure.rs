//! Procedure log models.

use serde::{Deserialize, Serialize};

/// A billed procedure in the procedure log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcedureRecord {
    /// Generated identifier (or the id of the prescription line it came from)
    pub id: String,
    /// Patient id
    pub patient_id: String,
    /// Patient name cached at save time
    pub patient_name: String,
    /// Procedure name
    pub procedure_name: String,
    /// Date performed, `YYYY-MM-DD`
    pub date: String,
    /// Cost as entered
    pub cost: String,
    /// Notes
    pub notes: String,
}

/// Procedure form contents. `id` is `None` for a new record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProcedureInput {
    pub id: Option<String>,
    pub patient_id: String,
    pub procedure_name: String,
    pub date: String,
    pub cost: String,
    pub notes: String,
}

impl ProcedureRecord {
    /// Numeric cost for aggregation.
    pub fn cost_amount(&self) -> f64 {
        parse_amount(&self.cost)
    }
}

impl ProcedureInput {
    /// Build the stored record with the given id and cached patient name.
    pub fn into_record(self, id: String, patient_name: String) -> ProcedureRecord {
        ProcedureRecord {
            id,
            patient_id: self.patient_id,
            patient_name,
            procedure_name: self.procedure_name,
            date: self.date,
            cost: self.cost,
            notes: self.notes,
        }
    }
}

/// Parse the leading decimal number of an amount, 0 when there is none.
///
/// "150" → 150, "99.5 INR" → 99.5, "abc" → 0.
pub fn parse_amount(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (i, c) in trimmed.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }
    if !seen_digit {
        return 0.0;
    }
    trimmed[..end]
        .trim_end_matches('.')
        .parse()
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("500"), 500.0);
        assert_eq!(parse_amount(" 99.5 INR"), 99.5);
        assert_eq!(parse_amount("12."), 12.0);
        assert_eq!(parse_amount("-20"), -20.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("."), 0.0);
    }
}
