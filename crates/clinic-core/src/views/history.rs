//! Prescription history filtering.

use std::cmp::Reverse;

use chrono::{Local, NaiveDate};

use crate::models::Prescription;

/// Inclusive calendar-date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Default for DateRange {
    /// 2023-01-01 through today.
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default(),
            end: Local::now().date_naive(),
        }
    }
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Start as `YYYY-MM-DD`.
    pub fn start_iso(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    /// End as `YYYY-MM-DD`.
    pub fn end_iso(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }

    /// Check if an ISO date string falls inside the range.
    ///
    /// Comparison is on the text, so stored dates must be `YYYY-MM-DD`.
    pub fn contains(&self, date: &str) -> bool {
        date >= self.start_iso().as_str() && date <= self.end_iso().as_str()
    }
}

/// How many rows a history screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    /// At most this many entries
    Recent(usize),
    All,
}

impl HistoryMode {
    fn cap<T>(self, mut items: Vec<T>) -> Vec<T> {
        if let HistoryMode::Recent(limit) = self {
            items.truncate(limit);
        }
        items
    }
}

/// Prescriptions whose date lies in `range`, in input order.
pub fn filter_by_range<'a>(
    prescriptions: &'a [Prescription],
    range: &DateRange,
) -> Vec<&'a Prescription> {
    prescriptions
        .iter()
        .filter(|rx| range.contains(&rx.date))
        .collect()
}

/// Sort newest first. Equal dates keep their relative order.
pub fn newest_first(prescriptions: &mut [&Prescription]) {
    prescriptions.sort_by_key(|rx| Reverse(rx.date.clone()));
}

/// One patient's prescriptions in range, newest first.
pub fn patient_history<'a>(
    prescriptions: &'a [Prescription],
    patient_id: &str,
    range: &DateRange,
    mode: HistoryMode,
) -> Vec<&'a Prescription> {
    let mut rows: Vec<&Prescription> = filter_by_range(prescriptions, range)
        .into_iter()
        .filter(|rx| rx.patient_id == patient_id)
        .collect();
    newest_first(&mut rows);
    mode.cap(rows)
}

/// Every prescription in range matching `search` on patient name or
/// diagnosis (case-insensitive), newest first.
pub fn all_history<'a>(
    prescriptions: &'a [Prescription],
    range: &DateRange,
    search: &str,
    mode: HistoryMode,
) -> Vec<&'a Prescription> {
    let needle = search.to_lowercase();
    let mut rows: Vec<&Prescription> = filter_by_range(prescriptions, range)
        .into_iter()
        .filter(|rx| {
            rx.patient_name.to_lowercase().contains(&needle)
                || rx.diagnosis.to_lowercase().contains(&needle)
        })
        .collect();
    newest_first(&mut rows);
    mode.cap(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::sample_snapshot;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ids(rows: &[&Prescription]) -> Vec<String> {
        rows.iter().map(|rx| rx.id.clone()).collect()
    }

    #[test]
    fn test_full_year_keeps_input_order() {
        let snapshot = sample_snapshot();
        let range = DateRange::new(ymd(2023, 1, 1), ymd(2023, 12, 31));
        let rows = filter_by_range(&snapshot.prescriptions, &range);
        assert_eq!(ids(&rows), vec!["rx1", "rx2", "rx3"]);
    }

    #[test]
    fn test_narrowed_end() {
        let snapshot = sample_snapshot();
        let range = DateRange::new(ymd(2023, 1, 1), ymd(2023, 10, 31));
        let rows = filter_by_range(&snapshot.prescriptions, &range);
        assert_eq!(ids(&rows), vec!["rx2"]);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let range = DateRange::new(ymd(2023, 10, 1), ymd(2023, 11, 18));
        assert!(range.contains("2023-10-01"));
        assert!(range.contains("2023-11-18"));
        assert!(!range.contains("2023-11-19"));
    }

    #[test]
    fn test_patient_history_newest_first_and_capped() {
        let snapshot = sample_snapshot();
        let range = DateRange::new(ymd(2023, 1, 1), ymd(2023, 12, 31));

        let rows = patient_history(&snapshot.prescriptions, "1", &range, HistoryMode::All);
        assert_eq!(ids(&rows), vec!["rx1", "rx2"]);

        let rows = patient_history(&snapshot.prescriptions, "1", &range, HistoryMode::Recent(1));
        assert_eq!(ids(&rows), vec!["rx1"]);
    }

    #[test]
    fn test_all_history_search() {
        let snapshot = sample_snapshot();
        let range = DateRange::new(ymd(2023, 1, 1), ymd(2023, 12, 31));

        let rows = all_history(&snapshot.prescriptions, &range, "", HistoryMode::Recent(20));
        assert_eq!(ids(&rows), vec!["rx1", "rx3", "rx2"]);

        let rows = all_history(&snapshot.prescriptions, &range, "ROBERT", HistoryMode::All);
        assert_eq!(ids(&rows), vec!["rx3"]);

        let rows = all_history(&snapshot.prescriptions, &range, "cold", HistoryMode::All);
        assert_eq!(ids(&rows), vec!["rx2"]);
    }

    #[test]
    fn test_default_range_starts_2023() {
        assert_eq!(DateRange::default().start_iso(), "2023-01-01");
    }
}
