//! fintool core: market data in, financial summary out.
//!
//! - Domain types (bars, price and return series, lookback periods)
//! - Market-data providers behind the `DataProvider` trait (Yahoo Finance,
//!   CSV files, synthetic bars, and a "not configured" placeholder)
//! - Pure statistics and metric functions (returns, annualized volatility)
//! - Summary records, text reports, and TOML configuration

pub mod config;
pub mod data;
pub mod domain;
pub mod metrics;
pub mod report;
pub mod stats;
pub mod summary;

pub use config::{AppConfig, ConfigError, LogLevel, ProviderConfig, ProviderKind};
pub use data::{build_provider, DataError, DataProvider, DataSource, FetchResult};
pub use domain::{Bar, Period, PriceSeries, ReturnsSeries};
pub use metrics::{annualized_volatility, daily_returns, price_change_pct, summarize, Analyzer};
pub use report::{render_report, FETCH_FAILED_MESSAGE};
pub use summary::{Summary, SummaryRecord};

#[cfg(test)]
mod tests {
    use super::*;

    /// Providers and results cross thread boundaries in embedding apps.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<PriceSeries>();
        require_sync::<PriceSeries>();
        require_send::<Summary>();
        require_sync::<Summary>();
        require_send::<data::YahooProvider>();
        require_sync::<data::YahooProvider>();
        require_send::<Box<dyn DataProvider>>();
        require_sync::<Box<dyn DataProvider>>();
        require_send::<Analyzer<Box<dyn DataProvider>>>();
    }
}
