//! Build a provider from configuration.

use super::circuit_breaker::CircuitBreaker;
use super::csv_import::CsvProvider;
use super::provider::DataProvider;
use super::synthetic::SyntheticProvider;
use super::unconfigured::UnconfiguredProvider;
use super::yahoo::{YahooProvider, YahooSettings};
use crate::config::{ProviderConfig, ProviderKind};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Construct the provider named by `config`.
///
/// Never fails: a configuration that cannot produce a working provider
/// yields an [`UnconfiguredProvider`] carrying the reason, and the reason is
/// logged once here.
pub fn build_provider(config: &ProviderConfig) -> Box<dyn DataProvider> {
    let provider: Box<dyn DataProvider> = match config.kind {
        ProviderKind::Yahoo => {
            let settings = YahooSettings {
                timeout: Duration::from_secs(config.timeout_secs),
                max_retries: config.max_retries,
                ..YahooSettings::default()
            };
            match YahooProvider::new(Arc::new(CircuitBreaker::default_provider()), settings) {
                Ok(p) => Box::new(p),
                Err(e) => unconfigured(format!("Yahoo provider unavailable: {e}")),
            }
        }
        ProviderKind::Csv => match &config.csv_dir {
            Some(dir) => Box::new(CsvProvider::new(dir)),
            None => unconfigured("csv provider requires csv_dir".to_string()),
        },
        ProviderKind::Synthetic => Box::new(SyntheticProvider::new()),
        ProviderKind::None => unconfigured("no data provider selected".to_string()),
    };
    info!(provider = provider.name(), "data provider ready");
    provider
}

fn unconfigured(reason: String) -> Box<dyn DataProvider> {
    error!("{reason}");
    Box::new(UnconfiguredProvider::new(reason))
}
