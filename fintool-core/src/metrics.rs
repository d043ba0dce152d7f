//! Metrics pipeline: fetch, returns, volatility, summary.
//!
//! The fetched [`PriceSeries`] is a plain value: `Analyzer::fetch` hands it
//! back and the metric functions take it as an argument. `None` stands for
//! "nothing fetched" and every function degrades to absence instead of
//! failing. Apart from fetching, everything here is a pure function.

use crate::data::{DataError, DataProvider};
use crate::domain::{Period, PriceSeries, ReturnsSeries};
use crate::stats::{annualize, mean, sample_std_dev, TRADING_DAYS_PER_YEAR};
use crate::summary::{Summary, SummaryRecord};
use tracing::{error, info, warn};

/// Fetches price series through an injected provider.
pub struct Analyzer<P: DataProvider> {
    provider: P,
}

impl<P: DataProvider> Analyzer<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Fetch the series for `symbol`, returning the provider's error.
    pub fn try_fetch(&self, symbol: &str, period: Period) -> Result<PriceSeries, DataError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol(symbol.to_string()));
        }
        if !self.provider.is_available() {
            warn!(
                provider = self.provider.name(),
                "provider reports unavailable; attempting fetch anyway"
            );
        }

        info!("Fetching data for {symbol} (period: {period})");
        let result = self.provider.fetch(symbol, period)?;
        info!(
            symbol,
            rows = result.series.len(),
            source = ?result.source,
            "fetched price series"
        );
        let void = result.series.bars().iter().filter(|b| b.is_void()).count();
        if void > 0 {
            warn!(symbol, void, "series contains bars with missing prices");
        }
        Ok(result.series)
    }

    /// Fetch the series for `symbol`. Any failure is logged and turned into
    /// `None`; callers treat that as "no data".
    pub fn fetch(&self, symbol: &str, period: Period) -> Option<PriceSeries> {
        match self.try_fetch(symbol, period) {
            Ok(series) => Some(series),
            Err(e) => {
                error!("Failed to fetch data for {symbol}: {e}");
                None
            }
        }
    }
}

fn loaded(series: Option<&PriceSeries>) -> Option<&PriceSeries> {
    series.filter(|s| !s.is_empty())
}

/// Daily close-to-close returns. `None` when there is no series or it is
/// empty; a single-bar series gives an empty result.
pub fn daily_returns(series: Option<&PriceSeries>) -> Option<ReturnsSeries> {
    let Some(series) = loaded(series) else {
        error!("No data available for returns calculation");
        return None;
    };
    Some(ReturnsSeries::from_prices(series))
}

/// Annualized volatility: sample std-dev of daily returns × sqrt(252).
///
/// `None` when returns are unavailable or there are fewer than two of them.
pub fn annualized_volatility(series: Option<&PriceSeries>) -> Option<f64> {
    let returns = daily_returns(series)?;
    let daily = sample_std_dev(&returns.values())?;
    Some(annualize(daily, TRADING_DAYS_PER_YEAR))
}

/// Percent change from the first close to the last. Needs two bars.
pub fn price_change_pct(series: &PriceSeries) -> Option<f64> {
    if series.len() < 2 {
        return None;
    }
    let first = series.first()?.close;
    let last = series.last()?.close;
    let pct = (last / first - 1.0) * 100.0;
    pct.is_finite().then_some(pct)
}

/// Build the summary for `symbol`. Without a (non-empty) series the result
/// is the error form; otherwise each field is computed on its own.
pub fn summarize(symbol: &str, series: Option<&PriceSeries>) -> Summary {
    let Some(prices) = loaded(series) else {
        return Summary::no_data();
    };

    let current_price = prices.last().map(|b| b.close).filter(|c| c.is_finite());

    Summary::Record(SummaryRecord {
        symbol: symbol.to_string(),
        current_price,
        avg_volume: mean(&prices.volumes()),
        volatility: annualized_volatility(Some(prices)),
        price_change_pct: price_change_pct(prices),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Bar;
    use chrono::NaiveDate;

    fn series(closes: &[f64]) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| Bar::from_close(start + chrono::Duration::days(i as i64), c, 100.0))
            .collect();
        PriceSeries::new("TEST", bars).unwrap()
    }

    #[test]
    fn absent_series_gives_absence() {
        assert!(daily_returns(None).is_none());
        assert!(annualized_volatility(None).is_none());
        assert!(summarize("TEST", None).error().is_some());
    }

    #[test]
    fn empty_series_counts_as_absent() {
        let empty = PriceSeries::new("TEST", Vec::new()).unwrap();
        assert!(daily_returns(Some(&empty)).is_none());
        assert!(annualized_volatility(Some(&empty)).is_none());
        assert_eq!(summarize("TEST", Some(&empty)), Summary::no_data());
    }

    #[test]
    fn single_bar() {
        let s = series(&[100.0]);
        assert!(daily_returns(Some(&s)).unwrap().is_empty());
        assert!(annualized_volatility(Some(&s)).is_none());

        let summary = summarize("TEST", Some(&s));
        let record = summary.record().unwrap();
        assert_eq!(record.current_price, Some(100.0));
        assert_eq!(record.avg_volume, Some(100.0));
        assert_eq!(record.price_change_pct, None);
        assert_eq!(record.volatility, None);
    }

    #[test]
    fn two_returns_minimum_for_volatility() {
        assert!(annualized_volatility(Some(&series(&[100.0, 101.0]))).is_none());
        assert!(annualized_volatility(Some(&series(&[100.0, 101.0, 100.0]))).is_some());
    }

    #[test]
    fn volatility_matches_manual_computation() {
        let s = series(&[100.0, 102.0, 99.0, 101.0]);
        let r = [0.02, 99.0 / 102.0 - 1.0, 101.0 / 99.0 - 1.0];
        let m = r.iter().sum::<f64>() / 3.0;
        let var = r.iter().map(|x| (x - m).powi(2)).sum::<f64>() / 2.0;
        let expected = var.sqrt() * 252.0_f64.sqrt();
        let got = annualized_volatility(Some(&s)).unwrap();
        assert!((got - expected).abs() < 1e-12);
    }

    #[test]
    fn nan_last_close_leaves_other_fields() {
        let s = series(&[100.0, 110.0, f64::NAN]);
        let summary = summarize("TEST", Some(&s));
        let record = summary.record().unwrap();
        assert_eq!(record.current_price, None);
        assert_eq!(record.price_change_pct, None);
        assert_eq!(record.avg_volume, Some(100.0));
    }
}
