//! Lookback period: the fixed set of history windows a fetch can request.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// History window for a fetch. Codes match the ones market-data providers
/// accept (`1d`, `5d`, `1mo`, ... `max`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "5d")]
    FiveDays,
    #[serde(rename = "1mo")]
    OneMonth,
    #[serde(rename = "3mo")]
    ThreeMonths,
    #[serde(rename = "6mo")]
    SixMonths,
    #[default]
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "2y")]
    TwoYears,
    #[serde(rename = "5y")]
    FiveYears,
    #[serde(rename = "10y")]
    TenYears,
    #[serde(rename = "ytd")]
    YearToDate,
    #[serde(rename = "max")]
    Max,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown period '{0}' (valid: 1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max)")]
pub struct ParsePeriodError(pub String);

impl Period {
    pub const ALL: [Period; 11] = [
        Period::OneDay,
        Period::FiveDays,
        Period::OneMonth,
        Period::ThreeMonths,
        Period::SixMonths,
        Period::OneYear,
        Period::TwoYears,
        Period::FiveYears,
        Period::TenYears,
        Period::YearToDate,
        Period::Max,
    ];

    /// Provider-facing short code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::OneDay => "1d",
            Period::FiveDays => "5d",
            Period::OneMonth => "1mo",
            Period::ThreeMonths => "3mo",
            Period::SixMonths => "6mo",
            Period::OneYear => "1y",
            Period::TwoYears => "2y",
            Period::FiveYears => "5y",
            Period::TenYears => "10y",
            Period::YearToDate => "ytd",
            Period::Max => "max",
        }
    }

    /// First date (inclusive) of the window ending at `anchor`.
    ///
    /// `None` means unbounded (`max`). Day and month arithmetic is calendar
    /// based; a month subtraction that lands on a missing day clamps to the
    /// end of that month.
    pub fn start_date(&self, anchor: NaiveDate) -> Option<NaiveDate> {
        let start = match self {
            Period::OneDay => anchor.checked_sub_days(Days::new(1)),
            Period::FiveDays => anchor.checked_sub_days(Days::new(5)),
            Period::OneMonth => anchor.checked_sub_months(Months::new(1)),
            Period::ThreeMonths => anchor.checked_sub_months(Months::new(3)),
            Period::SixMonths => anchor.checked_sub_months(Months::new(6)),
            Period::OneYear => anchor.checked_sub_months(Months::new(12)),
            Period::TwoYears => anchor.checked_sub_months(Months::new(24)),
            Period::FiveYears => anchor.checked_sub_months(Months::new(60)),
            Period::TenYears => anchor.checked_sub_months(Months::new(120)),
            Period::YearToDate => NaiveDate::from_ymd_opt(anchor.year(), 1, 1),
            Period::Max => return None,
        };
        Some(start.unwrap_or(NaiveDate::MIN))
    }

    /// Whether `date` falls inside the window ending at `anchor`.
    pub fn contains(&self, anchor: NaiveDate, date: NaiveDate) -> bool {
        if date > anchor {
            return false;
        }
        match self.start_date(anchor) {
            Some(start) => date >= start,
            None => true,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Period::ALL
            .into_iter()
            .find(|p| p.as_str() == code)
            .ok_or_else(|| ParsePeriodError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn parses_every_code() {
        for p in Period::ALL {
            assert_eq!(p.as_str().parse::<Period>().unwrap(), p);
        }
        assert_eq!("YTD".parse::<Period>().unwrap(), Period::YearToDate);
    }

    #[test]
    fn rejects_unknown_code() {
        let err = "3y".parse::<Period>().unwrap_err();
        assert!(err.to_string().contains("3y"));
    }

    #[test]
    fn default_is_one_year() {
        assert_eq!(Period::default(), Period::OneYear);
    }

    #[test]
    fn serde_uses_short_codes() {
        let json = serde_json::to_string(&Period::SixMonths).unwrap();
        assert_eq!(json, "\"6mo\"");
        let back: Period = serde_json::from_str("\"10y\"").unwrap();
        assert_eq!(back, Period::TenYears);
    }

    #[test]
    fn window_starts() {
        let anchor = d(2024, 3, 31);
        assert_eq!(Period::FiveDays.start_date(anchor), Some(d(2024, 3, 26)));
        assert_eq!(Period::OneMonth.start_date(anchor), Some(d(2024, 2, 29)));
        assert_eq!(Period::OneYear.start_date(anchor), Some(d(2023, 3, 31)));
        assert_eq!(Period::YearToDate.start_date(anchor), Some(d(2024, 1, 1)));
        assert_eq!(Period::Max.start_date(anchor), None);
    }

    #[test]
    fn contains_respects_both_ends() {
        let anchor = d(2024, 6, 30);
        assert!(Period::ThreeMonths.contains(anchor, d(2024, 4, 1)));
        assert!(!Period::ThreeMonths.contains(anchor, d(2024, 3, 1)));
        assert!(!Period::Max.contains(anchor, d(2024, 7, 1)));
        assert!(Period::Max.contains(anchor, d(1990, 1, 1)));
    }
}
