//! Procedure revenue.

use crate::models::ProcedureRecord;

/// Sum of all procedure costs. Unparseable costs count as zero.
pub fn total_revenue(procedures: &[ProcedureRecord]) -> f64 {
    procedures.iter().map(ProcedureRecord::cost_amount).sum()
}

/// Format an amount as rupees with Indian digit grouping, e.g. `₹ 1,25,000.5`.
///
/// At most three fraction digits are shown; trailing zeros are dropped.
pub fn format_inr(amount: f64) -> String {
    let negative = amount < 0.0;
    let scaled = (amount.abs() * 1000.0).round() as u64;
    let whole = scaled / 1000;
    let fraction = scaled % 1000;

    let mut out = String::from("₹ ");
    if negative && scaled > 0 {
        out.push('-');
    }
    out.push_str(&group_indian(whole));
    if fraction > 0 {
        let digits = format!("{:03}", fraction);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

/// Group as lakh/crore: the last three digits, then pairs.
fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
