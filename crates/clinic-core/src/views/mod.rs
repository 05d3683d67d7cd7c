//! Read-only projections over a [`Snapshot`](crate::store::Snapshot).

pub mod dashboard;
pub mod history;
pub mod revenue;
pub mod search;

pub use dashboard::Dashboard;
pub use history::{all_history, filter_by_range, patient_history, DateRange, HistoryMode};
pub use revenue::{format_inr, total_revenue};
