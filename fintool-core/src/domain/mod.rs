//! Domain types: bars, price/return series, lookback periods.

pub mod bar;
pub mod period;
pub mod series;

pub use bar::Bar;
pub use period::{ParsePeriodError, Period};
pub use series::{DailyReturn, PriceSeries, ReturnsSeries, SeriesError};
