//! Rupee amounts with Indian digit grouping.

use std::fmt::Write;

use serde_json::Value;

use super::fields::text;

/// Formats an amount as rupees with lakh/crore grouping.
///
/// ```rust
/// use agenda_core::view::format_inr;
///
/// assert_eq!(format_inr(50000.0), "₹50,000");
/// assert_eq!(format_inr(1234567.0), "₹12,34,567");
/// assert_eq!(format_inr(999.5), "₹999.50");
/// ```
pub fn format_inr(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let paise = cents % 100;

    let mut out = String::new();
    if amount < 0.0 && cents > 0 {
        out.push('-');
    }
    out.push('₹');
    out.push_str(&group_indian(whole));
    if paise > 0 {
        let _ = write!(out, ".{paise:02}");
    }
    out
}

/// Groups the last three digits, then every two: `12,34,567`.
fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (mut rest, last_three) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    while rest.len() > 2 {
        let (head, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = head;
    }
    groups.push(rest);
    groups.reverse();
    format!("{},{last_three}", groups.join(","))
}

/// Reads a money field: numbers are formatted as rupees, text is kept as
/// the producer wrote it.
pub(crate) fn amount_text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::Number(n)) => n.as_f64().map(format_inr),
        other => text(other),
    }
}
