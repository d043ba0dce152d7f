//! Summary record: the flat result of analysing one symbol.

use serde::{Deserialize, Serialize};

pub const NO_DATA_ERROR: &str = "No data available";

/// Metrics for one symbol. Every numeric field is independently optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub symbol: String,
    pub current_price: Option<f64>,
    pub avg_volume: Option<f64>,
    pub volatility: Option<f64>,
    pub price_change_pct: Option<f64>,
}

/// Either a full record or the error form used when there was no series.
///
/// Serializes flat: `{"symbol": ..., "current_price": ...}` or
/// `{"error": "No data available"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Summary {
    Record(SummaryRecord),
    Unavailable { error: String },
}

/// A single present field, ready for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SummaryValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl Summary {
    pub fn no_data() -> Self {
        Summary::Unavailable {
            error: NO_DATA_ERROR.to_string(),
        }
    }

    pub fn record(&self) -> Option<&SummaryRecord> {
        match self {
            Summary::Record(r) => Some(r),
            Summary::Unavailable { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Summary::Record(_) => None,
            Summary::Unavailable { error } => Some(error),
        }
    }

    /// Present fields in display order. Absent values and the error entry
    /// are left out.
    pub fn fields(&self) -> Vec<(&'static str, SummaryValue<'_>)> {
        let Some(r) = self.record() else {
            return Vec::new();
        };
        let numbers = [
            ("current_price", r.current_price),
            ("avg_volume", r.avg_volume),
            ("volatility", r.volatility),
            ("price_change_pct", r.price_change_pct),
        ];
        std::iter::once(("symbol", SummaryValue::Text(r.symbol.as_str())))
            .chain(
                numbers
                    .into_iter()
                    .filter_map(|(k, v)| v.map(|v| (k, SummaryValue::Number(v)))),
            )
            .collect()
    }
}
