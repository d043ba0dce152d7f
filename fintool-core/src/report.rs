//! Plain-text rendering of a [`Summary`].

use crate::summary::{Summary, SummaryValue};
use std::fmt::Write;

/// Printed instead of a report when the fetch produced no data.
pub const FETCH_FAILED_MESSAGE: &str =
    "Failed to fetch financial data. Please check your internet connection and try again.";

/// `price_change_pct` → `Price Change Pct`.
pub fn title_case(key: &str) -> String {
    key.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Header line plus one `Key: value` line per present field. Floats get four
/// decimals.
pub fn render_report(symbol: &str, summary: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "=== Financial Analysis for {symbol} ===");
    for (key, value) in summary.fields() {
        let title = title_case(key);
        let _ = match value {
            SummaryValue::Number(v) => writeln!(out, "{title}: {v:.4}"),
            SummaryValue::Text(s) => writeln!(out, "{title}: {s}"),
        };
    }
    out
}
