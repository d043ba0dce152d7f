//! Price and return series.

use super::Bar;
use crate::stats::pct_change;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SeriesError {
    #[error("duplicate bar date {date} for {symbol}")]
    DuplicateDate { symbol: String, date: NaiveDate },
}

/// Daily bars for one symbol, ascending by date with unique dates.
///
/// Immutable after construction. May be empty: a provider can legitimately
/// answer with no rows, and the metrics treat that like "no data".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    symbol: String,
    bars: Vec<Bar>,
}

impl PriceSeries {
    /// Build a series, sorting bars by date. Duplicate dates are rejected.
    pub fn new(symbol: impl Into<String>, mut bars: Vec<Bar>) -> Result<Self, SeriesError> {
        let symbol = symbol.into();
        bars.sort_by_key(|b| b.date);
        if let Some(pair) = bars.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(SeriesError::DuplicateDate {
                symbol,
                date: pair[0].date,
            });
        }
        Ok(Self { symbol, bars })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn first(&self) -> Option<&Bar> {
        self.bars.first()
    }

    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    /// Keep only bars whose date satisfies `keep`.
    pub fn retain_dates(self, keep: impl Fn(NaiveDate) -> bool) -> Self {
        let bars = self.bars.into_iter().filter(|b| keep(b.date)).collect();
        Self {
            symbol: self.symbol,
            bars,
        }
    }
}

/// One daily return, dated by the later of the two closes it compares.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyReturn {
    pub date: NaiveDate,
    pub value: f64,
}

/// Close-to-close returns derived from a [`PriceSeries`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnsSeries {
    points: Vec<DailyReturn>,
}

impl ReturnsSeries {
    /// Percent change of close between consecutive bars. The first bar has
    /// no prior close and non-finite ratios are dropped.
    pub fn from_prices(series: &PriceSeries) -> Self {
        let points = pct_change(&series.closes())
            .into_iter()
            .zip(series.bars().iter().skip(1))
            .filter_map(|(value, bar)| {
                value.map(|value| DailyReturn {
                    date: bar.date,
                    value,
                })
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[DailyReturn] {
        &self.points
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
