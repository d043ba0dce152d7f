//! Market-data providers

pub mod circuit_breaker;
pub mod csv_import;
pub mod factory;
pub mod provider;
pub mod synthetic;
pub mod unconfigured;
pub mod yahoo;

pub use circuit_breaker::CircuitBreaker;
pub use csv_import::CsvProvider;
pub use factory::build_provider;
pub use provider::{DataError, DataProvider, DataSource, FetchResult};
pub use synthetic::SyntheticProvider;
pub use unconfigured::UnconfiguredProvider;
pub use yahoo::{YahooProvider, YahooSettings};
