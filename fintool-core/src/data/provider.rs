//! Data provider trait and structured error types.
//!
//! The DataProvider trait abstracts over data sources (Yahoo Finance, CSV
//! files, synthetic bars) so the metrics pipeline never depends on a concrete
//! source and tests can substitute their own.

use crate::domain::{Period, PriceSeries, SeriesError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured error types for data operations.
///
/// Displayed verbatim in log lines, so messages carry the symbol where known.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("rate limited by provider (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("authentication required: {0}")]
    AuthenticationRequired(String),

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("invalid symbol: {0:?}")]
    InvalidSymbol(String),

    #[error("hard stop: data provider has blocked requests (circuit breaker tripped)")]
    CircuitBreakerTripped,

    #[error("validation error: {0}")]
    Validation(#[from] SeriesError),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("data provider not configured: {0}")]
    NotConfigured(String),

    #[error("data error: {0}")]
    Other(String),
}

/// Result of a successful data fetch for a single symbol.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub symbol: String,
    pub series: PriceSeries,
    pub source: DataSource,
}

/// Where the data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    YahooFinance,
    CsvImport,
    Synthetic,
}

/// Trait for market-data providers.
///
/// Implementations block until the data is available or the attempt has
/// failed; any timeout is the implementation's responsibility.
pub trait DataProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch daily OHLCV bars for `symbol` over `period`.
    fn fetch(&self, symbol: &str, period: Period) -> Result<FetchResult, DataError>;

    /// Check if the provider can currently serve requests.
    fn is_available(&self) -> bool;
}

impl<P: DataProvider + ?Sized> DataProvider for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn fetch(&self, symbol: &str, period: Period) -> Result<FetchResult, DataError> {
        (**self).fetch(symbol, period)
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}
