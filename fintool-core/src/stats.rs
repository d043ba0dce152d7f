//! Statistics helpers: pure functions over `f64` slices.
//!
//! Non-finite inputs (NaN, ±inf) are treated as missing and skipped, so a
//! single gap in provider data never poisons a whole aggregate.

/// Trading days per year used for annualization.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

fn finite(values: &[f64]) -> impl Iterator<Item = f64> + '_ {
    values.iter().copied().filter(|v| v.is_finite())
}

/// Arithmetic mean of the finite values. `None` if there are none.
pub fn mean(values: &[f64]) -> Option<f64> {
    let (sum, n) = finite(values).fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 {
        return None;
    }
    Some(sum / n as f64)
}

/// Sample standard deviation (n − 1 denominator) of the finite values.
///
/// `None` for fewer than two values. Uses Welford's running update, so a
/// run of identical values gives exactly zero.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    let (n, _, m2) = finite(values).fold((0usize, 0.0_f64, 0.0_f64), |(k, m, m2), v| {
        let k = k + 1;
        let delta = v - m;
        let m = m + delta / k as f64;
        (k, m, m2 + delta * (v - m))
    });
    if n < 2 {
        return None;
    }
    Some((m2 / (n - 1) as f64).sqrt())
}

/// Simple returns between consecutive values: `next / prev - 1`.
///
/// One entry per consecutive pair; `None` where the ratio is not finite.
pub fn pct_change(values: &[f64]) -> Vec<Option<f64>> {
    values
        .windows(2)
        .map(|w| {
            let r = w[1] / w[0] - 1.0;
            r.is_finite().then_some(r)
        })
        .collect()
}

/// Scale a per-period dispersion to a yearly figure: `x * sqrt(periods)`.
pub fn annualize(per_period: f64, periods_per_year: f64) -> f64 {
    per_period * periods_per_year.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_skips_nan() {
        assert_eq!(mean(&[1.0, f64::NAN, 3.0]), Some(2.0));
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[f64::NAN]), None);
    }

    #[test]
    fn std_dev_uses_sample_denominator() {
        // mean 5, squared deviations sum to 32, n - 1 = 7
        let xs = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let sd = sample_std_dev(&xs).unwrap();
        assert!((sd - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn std_dev_of_constant_is_zero() {
        assert_eq!(sample_std_dev(&[2.0, 2.0, 2.0]), Some(0.0));
    }

    #[test]
    fn std_dev_of_repeated_inexact_value_is_exactly_zero() {
        assert_eq!(sample_std_dev(&[0.1, 0.1, 0.1]), Some(0.0));
        assert_eq!(sample_std_dev(&[0.19999999999999996; 11]), Some(0.0));
    }

    #[test]
    fn pct_change_pairs_consecutive_values() {
        let r = pct_change(&[100.0, 110.0, f64::NAN, 50.0, 0.0, 10.0]);
        assert_eq!(r.len(), 5);
        assert!((r[0].unwrap() - 0.10).abs() < 1e-12);
        assert_eq!(r[1], None);
        assert_eq!(r[2], None);
        assert_eq!(r[3], Some(-1.0));
        assert_eq!(r[4], None);
        assert!(pct_change(&[1.0]).is_empty());
    }

    #[test]
    fn std_dev_needs_two_values() {
        assert_eq!(sample_std_dev(&[1.0]), None);
        assert_eq!(sample_std_dev(&[1.0, f64::NAN]), None);
    }

    #[test]
    fn annualize_scales_by_sqrt() {
        assert!((annualize(1.0, TRADING_DAYS_PER_YEAR) - 252.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(annualize(0.0, TRADING_DAYS_PER_YEAR), 0.0);
    }
}
