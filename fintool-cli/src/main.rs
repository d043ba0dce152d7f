//! fintool CLI: fetch one symbol and print its financial summary.
//!
//! With no arguments: AAPL over one year from Yahoo Finance, text report on
//! stdout, logs on stderr. Data-layer failures print a fixed message and
//! still exit 0; bad arguments or an unreadable config file do not.

use anyhow::Result;
use clap::Parser;
use fintool_core::{
    build_provider, render_report, summarize, Analyzer, AppConfig, LogLevel, Period,
    PriceSeries, ProviderKind, FETCH_FAILED_MESSAGE,
};
use std::path::PathBuf;
use tracing::{info, subscriber, trace};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(
    name = "fintool",
    version,
    about = "Fetch daily prices for a symbol and report returns, volatility and price change"
)]
struct Cli {
    /// TOML config file. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Ticker symbol (e.g., AAPL, MSFT). Defaults to AAPL.
    #[arg(long)]
    symbol: Option<String>,

    /// History window: 1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max.
    #[arg(long)]
    period: Option<Period>,

    /// Data provider: yahoo, csv, synthetic, none.
    #[arg(long)]
    provider: Option<ProviderKind>,

    /// Directory of <SYMBOL>.csv files (implies --provider csv when no provider is given).
    #[arg(long)]
    csv_dir: Option<PathBuf>,

    /// Log level: DEBUG, INFO, WARNING, ERROR, CRITICAL.
    #[arg(long)]
    log_level: Option<LogLevel>,

    /// Print the summary as JSON instead of the text report.
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied.
    fn resolve_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(symbol) = &self.symbol {
            config.symbol = symbol.clone();
        }
        config.symbol = config.symbol.trim().to_string();
        if let Some(period) = self.period {
            config.period = period;
        }
        if let Some(dir) = &self.csv_dir {
            config.provider.csv_dir = Some(dir.clone());
            if self.provider.is_none() {
                config.provider.kind = ProviderKind::Csv;
            }
        }
        if let Some(kind) = self.provider {
            config.provider.kind = kind;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        Ok(config)
    }
}

fn init_logging(level: LogLevel) -> Result<()> {
    let my_subscriber = FmtSubscriber::builder()
        .with_max_level(level.as_tracing_level())
        .with_writer(std::io::stderr)
        .finish();
    subscriber::set_global_default(my_subscriber)?;
    Ok(())
}

/// Stdout text for one run. A failed fetch or a summary in its error form
/// gives the fixed failure message.
fn render_output(symbol: &str, series: Option<&PriceSeries>, json: bool) -> Result<String> {
    let summary = summarize(symbol, series);
    if summary.error().is_some() {
        return Ok(format!("{FETCH_FAILED_MESSAGE}\n"));
    }
    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(&summary)?))
    } else {
        Ok(render_report(symbol, &summary))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    init_logging(config.log_level)?;
    trace!("resolved configuration: {config:?}");
    info!("Starting fintool");

    let analyzer = Analyzer::new(build_provider(&config.provider));
    let symbol = config.symbol.as_str();

    let series = analyzer.fetch(symbol, config.period);
    print!("{}", render_output(symbol, series.as_ref(), cli.json)?);

    info!("fintool analysis completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("fintool").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_arguments_gives_defaults() {
        let config = parse(&[]).resolve_config().unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn flags_override() {
        let config = parse(&[
            "--symbol",
            "MSFT",
            "--period",
            "ytd",
            "--log-level",
            "warning",
            "--provider",
            "synthetic",
        ])
        .resolve_config()
        .unwrap();
        assert_eq!(config.symbol, "MSFT");
        assert_eq!(config.period, Period::YearToDate);
        assert_eq!(config.log_level, LogLevel::Warning);
        assert_eq!(config.provider.kind, ProviderKind::Synthetic);
    }

    #[test]
    fn csv_dir_selects_csv_provider() {
        let config = parse(&["--csv-dir", "data"]).resolve_config().unwrap();
        assert_eq!(config.provider.kind, ProviderKind::Csv);
        assert_eq!(config.provider.csv_dir, Some(PathBuf::from("data")));
    }

    #[test]
    fn explicit_provider_wins_over_csv_dir() {
        let config = parse(&["--csv-dir", "data", "--provider", "none"])
            .resolve_config()
            .unwrap();
        assert_eq!(config.provider.kind, ProviderKind::None);
    }

    #[test]
    fn invalid_period_is_rejected() {
        let args = ["fintool", "--period", "3y"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn symbol_is_trimmed() {
        let config = parse(&["--symbol", " MSFT "]).resolve_config().unwrap();
        assert_eq!(config.symbol, "MSFT");
    }

    fn one_bar_series() -> PriceSeries {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let bar = fintool_core::Bar::from_close(date, 100.0, 1_000.0);
        PriceSeries::new("MSFT", vec![bar]).unwrap()
    }

    #[test]
    fn failed_fetch_prints_failure_message() {
        let out = render_output("MSFT", None, false).unwrap();
        assert_eq!(out, format!("{FETCH_FAILED_MESSAGE}\n"));
    }

    #[test]
    fn empty_series_prints_failure_message() {
        let empty = PriceSeries::new("MSFT", Vec::new()).unwrap();
        for json in [false, true] {
            let out = render_output("MSFT", Some(&empty), json).unwrap();
            assert_eq!(out, format!("{FETCH_FAILED_MESSAGE}\n"));
        }
    }

    #[test]
    fn loaded_series_prints_report_or_json() {
        let series = one_bar_series();
        let text = render_output("MSFT", Some(&series), false).unwrap();
        assert!(text.contains("=== Financial Analysis for MSFT ==="));
        assert!(text.contains("Current Price: 100.0000"));

        let json = render_output("MSFT", Some(&series), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["symbol"], "MSFT");
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let cli = parse(&["--config", "/no/such/fintool.toml"]);
        assert!(cli.resolve_config().is_err());
    }
}
