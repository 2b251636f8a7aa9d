//! Performance-ratio calculators
//!
//! Quick helpers to phrase a benchmark improvement: "takes X% less time",
//! "X% faster", "X times faster". All results are rounded to four
//! significant digits, since that is all a benchmark headline needs.

/// Rounds to four significant digits.
fn to_precision_4(value: f64) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let magnitude = value.abs().log10().floor();
    let factor = 10f64.powf(3.0 - magnitude);
    (value * factor).round() / factor
}

/// Percentage by which the new run takes less time than the old one, as in
/// "made it take 50% less time".
///
/// # Example
///
/// ```rust
/// use zaka_utils::perf::reduction;
///
/// assert_eq!(reduction(1000.0, 500.0), 50.0);
/// ```
pub fn reduction(old_ms: f64, new_ms: f64) -> f64 {
    to_precision_4((old_ms - new_ms) / old_ms * 100.0)
}

/// Percentage by which the new run is faster than the old one, as in "made
/// it 300% faster".
///
/// # Example
///
/// ```rust
/// use zaka_utils::perf::speedup;
///
/// assert_eq!(speedup(1000.0, 250.0), 300.0);
/// ```
pub fn speedup(old_ms: f64, new_ms: f64) -> f64 {
    to_precision_4((old_ms - new_ms) / new_ms * 100.0)
}

/// How many times faster the new run is, as in "made it 4 times faster".
///
/// # Example
///
/// ```rust
/// use zaka_utils::perf::times_faster;
///
/// assert_eq!(times_faster(1000.0, 250.0), 4.0);
/// ```
pub fn times_faster(old_ms: f64, new_ms: f64) -> f64 {
    to_precision_4(old_ms / new_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduction() {
        assert_eq!(reduction(1000.0, 500.0), 50.0);
        assert_eq!(reduction(1000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_speedup() {
        assert_eq!(speedup(1000.0, 250.0), 300.0);
    }

    #[test]
    fn test_times_faster() {
        assert_eq!(times_faster(1000.0, 250.0), 4.0);
        assert_eq!(times_faster(1000.0, 3.0), 333.3);
    }

    #[test]
    fn test_four_significant_digits() {
        // 1000/7 = 142.857... -> 142.9
        assert_eq!(times_faster(1000.0, 7.0), 142.9);
        // regressions come out negative
        assert_eq!(reduction(500.0, 1000.0), -100.0);
    }
}
