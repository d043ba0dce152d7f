//! Property tests for the metric functions.
//!
//! 1. Returns length: n positive closes give n − 1 returns
//! 2. Volatility: non-negative and unchanged when every price is scaled
//! 3. Price change: sign follows last close vs first close

use chrono::NaiveDate;
use fintool_core::{annualized_volatility, daily_returns, price_change_pct, Bar, PriceSeries};
use proptest::prelude::*;

fn arb_closes() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((1.0..1000.0_f64).prop_map(|p| (p * 100.0).round() / 100.0), 0..60)
}

fn series(closes: &[f64]) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &c)| Bar::from_close(start + chrono::Duration::days(i as i64), c, 1.0))
        .collect();
    PriceSeries::new("PROP", bars).unwrap()
}

proptest! {
    #[test]
    fn returns_have_one_fewer_entry(closes in arb_closes()) {
        let s = series(&closes);
        match daily_returns(Some(&s)) {
            None => prop_assert!(closes.is_empty()),
            Some(r) => prop_assert_eq!(r.len(), closes.len() - 1),
        }
    }

    #[test]
    fn volatility_is_non_negative_and_scale_free(
        closes in arb_closes(),
        scale in 0.1..10.0_f64,
    ) {
        let base = annualized_volatility(Some(&series(&closes)));
        let scaled: Vec<f64> = closes.iter().map(|c| c * scale).collect();
        let rescaled = annualized_volatility(Some(&series(&scaled)));

        prop_assert_eq!(base.is_some(), closes.len() >= 3);
        if let (Some(a), Some(b)) = (base, rescaled) {
            prop_assert!(a >= 0.0);
            prop_assert!((a - b).abs() < 1e-9 * a.max(1.0));
        }
    }

    #[test]
    fn price_change_sign_follows_endpoints(closes in arb_closes()) {
        let s = series(&closes);
        match price_change_pct(&s) {
            None => prop_assert!(closes.len() < 2),
            Some(pct) => {
                let (first, last) = (closes[0], closes[closes.len() - 1]);
                if last > first {
                    prop_assert!(pct > 0.0);
                } else if last < first {
                    prop_assert!(pct < 0.0);
                } else {
                    prop_assert_eq!(pct, 0.0);
                }
            }
        }
    }
}
