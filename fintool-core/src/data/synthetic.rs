//! Synthetic bars for offline development.
//!
//! A random walk seeded by the BLAKE3 hash of the symbol, so the same symbol,
//! window and [`WalkParams`] always give the same bars. Weekends are skipped.
//! These are clearly fake and tagged `DataSource::Synthetic`.

use super::provider::{DataError, DataProvider, DataSource, FetchResult};
use crate::domain::{Bar, Period, PriceSeries};
use chrono::{Datelike, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// How far back `max` reaches for generated data.
const MAX_HISTORY_YEARS: i32 = 20;

/// Shape of the generated random walk.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkParams {
    /// Close of the bar before the window.
    pub start_price: f64,
    /// Daily close-to-close moves are drawn uniformly from `±max_daily_move`.
    pub max_daily_move: f64,
    /// High and low extend past the open/close body by up to this fraction.
    pub max_wick: f64,
    /// Volume range, inclusive low and exclusive high.
    pub volume: (u64, u64),
}

impl Default for WalkParams {
    fn default() -> Self {
        Self {
            start_price: 100.0,
            max_daily_move: 0.03,
            max_wick: 0.01,
            volume: (500_000, 5_000_000),
        }
    }
}

pub struct SyntheticProvider {
    end: Option<NaiveDate>,
    params: WalkParams,
}

impl SyntheticProvider {
    /// Windows end today.
    pub fn new() -> Self {
        Self {
            end: None,
            params: WalkParams::default(),
        }
    }

    /// Windows end at a fixed date.
    pub fn ending_at(end: NaiveDate) -> Self {
        Self {
            end: Some(end),
            ..Self::new()
        }
    }

    pub fn with_params(mut self, params: WalkParams) -> Self {
        self.params = params;
        self
    }

    fn end_date(&self) -> NaiveDate {
        self.end.unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

impl Default for SyntheticProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn is_weekday(date: &NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Deterministic weekday random walk for `symbol` over `[start, end]`.
pub fn generate_bars(
    symbol: &str,
    start: NaiveDate,
    end: NaiveDate,
    params: &WalkParams,
) -> Vec<Bar> {
    let mut rng = StdRng::from_seed(*blake3::hash(symbol.as_bytes()).as_bytes());
    let (vol_lo, vol_hi) = params.volume;
    let mut prev_close = params.start_price;

    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(is_weekday)
        .map(|date| {
            let open = prev_close;
            let step = rng.gen_range(-params.max_daily_move..=params.max_daily_move);
            let close = open * (1.0 + step);
            let high = open.max(close) * (1.0 + rng.gen_range(0.0..=params.max_wick));
            let low = open.min(close) * (1.0 - rng.gen_range(0.0..=params.max_wick));
            let volume = if vol_hi > vol_lo {
                rng.gen_range(vol_lo..vol_hi) as f64
            } else {
                vol_lo as f64
            };
            prev_close = close;
            Bar {
                date,
                open,
                high,
                low,
                close,
                volume,
            }
        })
        .collect()
}

impl DataProvider for SyntheticProvider {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn fetch(&self, symbol: &str, period: Period) -> Result<FetchResult, DataError> {
        let end = self.end_date();
        let start = period.start_date(end).unwrap_or_else(|| {
            NaiveDate::from_ymd_opt(end.year() - MAX_HISTORY_YEARS, 1, 1).unwrap_or(end)
        });
        let series = PriceSeries::new(symbol, generate_bars(symbol, start, end, &self.params))?;
        Ok(FetchResult {
            symbol: symbol.to_string(),
            series,
            source: DataSource::Synthetic,
        })
    }

    fn is_available(&self) -> bool {
        true
    }
}
