//! Closed-form counting functions
//!
//! Combinations, permutations, and variations, with and without repetition,
//! plus a [`possibilities`] dispatcher that picks the right formula from a
//! description of the selection rules.
//!
//! All counting functions follow the sentinel policy: any out-of-domain
//! input (`n <= 0`, `r <= 0`, `r > n`, repeat counts that do not sum to
//! `n`) yields `0` rather than an error, and so does a count too large for
//! `u128`. Only [`possibilities`] can fail, and only when the combo
//! argument's shape does not match the formula the settings select.
//!
//! The formulas are computed as incremental products with checked
//! arithmetic instead of factorial quotients, so inputs well past the
//! `34!` ceiling of [`crate::number::factorial`] still count exactly.

use crate::error::{Result, UtilsError};

/// Number of ways to choose `r` elements out of `n`, order ignored.
///
/// Counts too large for `u128` yield `0`.
///
/// # Example
///
/// ```rust
/// use zaka_utils::number::combinatorics::combinations;
///
/// assert_eq!(combinations(5, 2), 10);
/// assert_eq!(combinations(5, 5), 1);
/// assert_eq!(combinations(5, 6), 0);
/// assert_eq!(combinations(40, 2), 780);
/// ```
pub fn combinations(n: i64, r: i64) -> u128 {
    if n <= 0 || r <= 0 || r > n {
        return 0;
    }
    // incremental product over the smaller side of the symmetry; after
    // step i the accumulator holds C(n - k + i, i), which is integral, so
    // the divisor left after cancelling always divides the accumulator
    let k = r.min(n - r) as u128;
    let n = n as u128;
    let mut acc: u128 = 1;
    for i in 1..=k {
        let g = gcd_u128(n - k + i, i);
        let divisor = i / g;
        acc = match (acc / divisor).checked_mul((n - k + i) / g) {
            Some(value) => value,
            None => return 0,
        };
    }
    acc
}

fn gcd_u128(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Number of ways to order `n` distinct elements.
///
/// Counts too large for `u128` (`n >= 35`) yield `0`.
pub fn permutations(n: i64) -> u128 {
    variations(n, n)
}

/// Number of ways to order `n` elements when some are indistinguishable.
///
/// `repeats` lists the multiplicity of each distinct element and must sum
/// to `n`. Counts too large for `u128` yield `0`.
///
/// # Example
///
/// ```rust
/// use zaka_utils::number::combinatorics::permutations_with_repetition;
///
/// assert_eq!(permutations_with_repetition(5, &[2, 1, 1, 1]), 60);
/// assert_eq!(permutations_with_repetition(5, &[2, 3]), 10);
/// assert_eq!(permutations_with_repetition(5, &[2, 3, 2]), 0);
/// ```
pub fn permutations_with_repetition(n: i64, repeats: &[i64]) -> u128 {
    if n <= 0 || repeats.is_empty() || repeats.iter().any(|r| *r <= 0) {
        return 0;
    }
    if repeats.iter().sum::<i64>() != n {
        return 0;
    }
    // multinomial as a product of binomials over the running total:
    // n! / (k1! k2! ...) = C(k1, k1) * C(k1+k2, k2) * ...
    let mut acc: u128 = 1;
    let mut placed: i64 = 0;
    for repeat in repeats {
        placed += repeat;
        let factor = combinations(placed, *repeat);
        if factor == 0 {
            return 0;
        }
        acc = match acc.checked_mul(factor) {
            Some(value) => value,
            None => return 0,
        };
    }
    acc
}

/// Number of ordered selections of `r` distinct elements out of `n`.
///
/// Counts too large for `u128` yield `0`.
pub fn variations(n: i64, r: i64) -> u128 {
    if n <= 0 || r <= 0 || r > n {
        return 0;
    }
    let mut acc: u128 = 1;
    for i in 0..r as u128 {
        acc = match acc.checked_mul(n as u128 - i) {
            Some(value) => value,
            None => return 0,
        };
    }
    acc
}

/// Number of ordered selections of `r` elements out of `n` when elements
/// may repeat: `n^r`. Values too large for `u128` yield `0`.
pub fn variations_with_repetition(n: i64, r: i64) -> u128 {
    if n <= 0 || r <= 0 {
        return 0;
    }
    let Ok(exponent) = u32::try_from(r) else {
        return 0;
    };
    (n as u128).checked_pow(exponent).unwrap_or(0)
}

/// Number of unordered selections of `r` elements out of `n` when elements
/// may repeat: the multiset formula `C(n + r - 1, r)`.
fn multiset_combinations(n: i64, r: i64) -> u128 {
    if n <= 0 || r <= 0 {
        return 0;
    }
    match n.checked_add(r - 1) {
        Some(pool) => combinations(pool, r),
        None => 0,
    }
}

/// The selection rules [`possibilities`] dispatches on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PossibilitySettings {
    /// Whether the same element may be selected more than once.
    pub elements_can_repeat: bool,
    /// Whether two selections with the same elements in different order
    /// count as different.
    pub order_matters: bool,
    /// Whether every available element must appear in the selection.
    pub all_elements_used: bool,
}

/// The size argument of [`possibilities`].
///
/// Most formulas take a scalar selection size; ordering indistinguishable
/// elements takes per-element multiplicities instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComboSize {
    /// How many elements each selection contains.
    Size(i64),
    /// Multiplicity of each distinct element; must sum to the option count.
    Repeats(Vec<i64>),
}

/// Counts the possible selections of `combo` out of `options` elements
/// under the given rules.
///
/// Picks the matching closed-form function from the settings. The only
/// error case is a shape mismatch between the selected formula and the
/// combo argument (scalar size where per-element repeats are needed, or
/// the reverse); every numeric edge case still resolves to the sentinel
/// `0` of the underlying formula.
///
/// # Example
///
/// ```rust
/// use zaka_utils::number::combinatorics::{possibilities, ComboSize, PossibilitySettings};
///
/// // lottery-style draw: unordered, no repetition
/// let settings = PossibilitySettings::default();
/// assert_eq!(possibilities(5, &ComboSize::Size(2), &settings).unwrap(), 10);
/// ```
pub fn possibilities(
    options: i64,
    combo: &ComboSize,
    settings: &PossibilitySettings,
) -> Result<u128> {
    let scalar = |combo: &ComboSize| -> Result<i64> {
        match combo {
            ComboSize::Size(size) => Ok(*size),
            ComboSize::Repeats(_) => Err(UtilsError::InvalidArgument(
                "this combination of settings takes a scalar combo size, not per-element repeats"
                    .to_string(),
            )),
        }
    };

    match (
        settings.order_matters,
        settings.elements_can_repeat,
        settings.all_elements_used,
    ) {
        (true, true, true) => match combo {
            ComboSize::Repeats(repeats) => Ok(permutations_with_repetition(options, repeats)),
            ComboSize::Size(_) => Err(UtilsError::InvalidArgument(
                "ordering indistinguishable elements takes per-element repeats, not a scalar size"
                    .to_string(),
            )),
        },
        (true, true, false) => Ok(variations_with_repetition(options, scalar(combo)?)),
        (true, false, true) => {
            scalar(combo)?;
            Ok(permutations(options))
        }
        (true, false, false) => Ok(variations(options, scalar(combo)?)),
        (false, true, false) => Ok(multiset_combinations(options, scalar(combo)?)),
        (false, false, false) => Ok(combinations(options, scalar(combo)?)),
        // unordered selections that use everything collapse to one outcome
        (false, _, true) => {
            scalar(combo)?;
            Ok(combinations(options, options))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combinations() {
        assert_eq!(combinations(5, 2), 10);
        assert_eq!(combinations(5, 5), 1);
        assert_eq!(combinations(5, 0), 0);
        assert_eq!(combinations(5, 6), 0);
        assert_eq!(combinations(5, -1), 0);
    }

    #[test]
    fn test_combinations_large_inputs() {
        assert_eq!(combinations(40, 2), 780);
        assert_eq!(combinations(40, 38), 780);
        assert_eq!(combinations(100, 3), 161_700);
        // the largest central binomial that still fits in u128
        assert_eq!(
            combinations(128, 64),
            23_951_146_041_928_082_866_135_587_776_380_551_750
        );
        // past the u128 limit the sentinel applies
        assert_eq!(combinations(200, 100), 0);
    }

    #[test]
    fn test_combinations_symmetry() {
        for n in 1i64..=20 {
            for r in 1..n {
                assert_eq!(combinations(n, r), combinations(n, n - r), "n={n} r={r}");
            }
        }
    }

    #[test]
    fn test_permutations() {
        assert_eq!(permutations(5), 120);
        assert_eq!(permutations(0), 0);
        assert_eq!(permutations(-1), 0);
        // 34! is the largest factorial that fits in u128
        assert_eq!(
            permutations(34),
            295_232_799_039_604_140_847_618_609_643_520_000_000
        );
        assert_eq!(permutations(35), 0);
    }

    #[test]
    fn test_variations() {
        assert_eq!(variations(5, 3), 60);
        assert_eq!(variations(5, -1), 0);
        assert_eq!(variations(5, 0), 0);
        assert_eq!(variations(-1, 5), 0);
        assert_eq!(variations(-1, 0), 0);
        assert_eq!(variations(-1, -1), 0);
        assert_eq!(variations(5, 6), 0);
    }

    #[test]
    fn test_variations_large_inputs() {
        assert_eq!(variations(40, 2), 1560);
        assert_eq!(variations(1_000_000, 3), 999_997_000_002_000_000);
        assert_eq!(variations(40, 40), 0);
    }

    #[test]
    fn test_permutations_with_repetition() {
        assert_eq!(permutations_with_repetition(5, &[2, 1, 1, 1]), 60);
        assert_eq!(permutations_with_repetition(5, &[2, 3]), 10);
        assert_eq!(permutations_with_repetition(5, &[2, 3, 2]), 0);
        assert_eq!(permutations_with_repetition(5, &[0]), 0);
        assert_eq!(permutations_with_repetition(0, &[5]), 0);
    }

    #[test]
    fn test_permutations_with_repetition_large_inputs() {
        assert_eq!(permutations_with_repetition(40, &[38, 2]), 780);
        assert_eq!(
            permutations_with_repetition(100, &[50, 50]),
            100_891_344_545_564_193_334_812_497_256
        );
    }

    #[test]
    fn test_variations_with_repetition() {
        assert_eq!(variations_with_repetition(5, 3), 125);
        assert_eq!(variations_with_repetition(5, 0), 0);
        assert_eq!(variations_with_repetition(5, -1), 0);
        assert_eq!(variations_with_repetition(-1, 5), 0);
        assert_eq!(variations_with_repetition(-1, -5), 0);
        assert_eq!(variations_with_repetition(-1, 0), 0);
    }

    #[test]
    fn test_possibilities_dispatch() {
        let unordered = PossibilitySettings::default();
        assert_eq!(
            possibilities(5, &ComboSize::Size(2), &unordered).unwrap(),
            10
        );

        let ordered = PossibilitySettings {
            order_matters: true,
            ..Default::default()
        };
        assert_eq!(possibilities(5, &ComboSize::Size(3), &ordered).unwrap(), 60);

        let full_ordering = PossibilitySettings {
            order_matters: true,
            all_elements_used: true,
            ..Default::default()
        };
        assert_eq!(
            possibilities(5, &ComboSize::Size(5), &full_ordering).unwrap(),
            120
        );

        let with_repeats = PossibilitySettings {
            order_matters: true,
            elements_can_repeat: true,
            ..Default::default()
        };
        assert_eq!(
            possibilities(5, &ComboSize::Size(3), &with_repeats).unwrap(),
            125
        );

        let indistinguishable = PossibilitySettings {
            order_matters: true,
            elements_can_repeat: true,
            all_elements_used: true,
        };
        assert_eq!(
            possibilities(5, &ComboSize::Repeats(vec![2, 3]), &indistinguishable).unwrap(),
            10
        );

        let multiset = PossibilitySettings {
            elements_can_repeat: true,
            ..Default::default()
        };
        assert_eq!(
            possibilities(3, &ComboSize::Size(2), &multiset).unwrap(),
            6 // C(4, 2)
        );

        let everything_unordered = PossibilitySettings {
            all_elements_used: true,
            ..Default::default()
        };
        assert_eq!(
            possibilities(5, &ComboSize::Size(5), &everything_unordered).unwrap(),
            1
        );
    }

    #[test]
    fn test_possibilities_shape_mismatch() {
        let indistinguishable = PossibilitySettings {
            order_matters: true,
            elements_can_repeat: true,
            all_elements_used: true,
        };
        assert!(possibilities(5, &ComboSize::Size(5), &indistinguishable).is_err());

        let ordered = PossibilitySettings {
            order_matters: true,
            ..Default::default()
        };
        assert!(possibilities(5, &ComboSize::Repeats(vec![2, 3]), &ordered).is_err());
    }
}
