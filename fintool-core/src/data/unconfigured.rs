//! Placeholder provider used when no real data source could be set up.

use super::provider::{DataError, DataProvider, FetchResult};
use crate::domain::Period;

/// Never available; every fetch fails with [`DataError::NotConfigured`].
#[derive(Debug, Clone)]
pub struct UnconfiguredProvider {
    reason: String,
}

impl UnconfiguredProvider {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl DataProvider for UnconfiguredProvider {
    fn name(&self) -> &str {
        "unconfigured"
    }

    fn fetch(&self, _symbol: &str, _period: Period) -> Result<FetchResult, DataError> {
        Err(DataError::NotConfigured(self.reason.clone()))
    }

    fn is_available(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_fails_with_reason() {
        let p = UnconfiguredProvider::new("no provider selected");
        assert!(!p.is_available());
        let err = p.fetch("AAPL", Period::OneYear).unwrap_err();
        assert_eq!(
            err.to_string(),
            "data provider not configured: no provider selected"
        );
    }
}
