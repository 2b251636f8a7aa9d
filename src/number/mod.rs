//! Number utility functions
//!
//! Predicates, rounding, aggregates, and unit conversions. Everything here
//! is a pure function; domain-invalid input yields a sentinel (`0`, `false`,
//! `None`, `NaN`) instead of an error. Counting formulas live in the
//! [`combinatorics`] submodule.

use rand::Rng;

pub mod combinatorics;

/// Checks if a number is even.
pub fn is_even(num: i64) -> bool {
    num % 2 == 0
}

/// Checks if a number is odd.
pub fn is_odd(num: i64) -> bool {
    num % 2 != 0
}

/// Rounds a number to a given decimal precision.
///
/// # Example
///
/// ```rust
/// use zaka_utils::number::round_to;
///
/// assert_eq!(round_to(69.69, 0), 70.0);
/// assert_eq!(round_to(69.69, 1), 69.7);
/// assert_eq!(round_to(3.14159, 2), 3.14);
/// ```
pub fn round_to(num: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (num * factor).round() / factor
}

/// Generates a random integer between `min` and `max`, both inclusive.
pub fn random_int(min: i64, max: i64) -> i64 {
    if min >= max {
        return min;
    }
    rand::thread_rng().gen_range(min..=max)
}

/// Checks if a number is prime. Trial division, fine for utility-scale
/// inputs.
pub fn is_prime(num: i64) -> bool {
    if num <= 1 {
        return false;
    }
    let mut i: i64 = 2;
    // bound as i <= num / i; squaring i would overflow near i64::MAX
    while i <= num / i {
        if num % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Sums all numbers of a slice.
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Averages all numbers of a slice. An empty slice yields `NaN`.
pub fn average(values: &[f64]) -> f64 {
    sum(values) / values.len() as f64
}

/// Checks if a number is between two values, inclusive.
pub fn is_between(num: f64, min: f64, max: f64) -> bool {
    num >= min && num <= max
}

/// Calculates the factorial of a number, saturating at `u128::MAX` rather
/// than overflowing.
pub fn factorial(num: u64) -> u128 {
    (1..=num as u128).fold(1u128, |acc, n| acc.saturating_mul(n))
}

/// Checks if a number is a perfect square. Negative numbers never are.
pub fn is_perfect_square(num: f64) -> bool {
    let root = num.sqrt();
    root.is_finite() && root.fract() == 0.0
}

/// Finds the greatest common divisor of two numbers.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Finds the least common multiple of two numbers. `lcm(0, 0)` is 0.
pub fn lcm(a: i64, b: i64) -> i64 {
    let divisor = gcd(a, b);
    if divisor == 0 {
        return 0;
    }
    (a / divisor * b).abs()
}

/// Absolute difference between two numbers.
pub fn abs_diff(a: f64, b: f64) -> f64 {
    (a - b).abs()
}

/// Checks if a number is negative (zero is not).
pub fn is_negative(num: f64) -> bool {
    num < 0.0
}

/// Checks if a number is positive (zero is not).
pub fn is_positive(num: f64) -> bool {
    num > 0.0
}

/// Smallest number of a slice, `None` when empty.
pub fn min(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

/// Biggest number of a slice, `None` when empty.
pub fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

// unit conversion factors
const MILES_PER_KILOMETER: f64 = 0.621371;
const KILOMETERS_PER_MILE: f64 = 1.609344;
const FEET_PER_METER: f64 = 3.28084;
const CENTIMETERS_PER_INCH: f64 = 2.54;

/// Converts degrees to radians.
///
/// # Example
///
/// ```rust
/// use zaka_utils::number::degrees_to_radians;
///
/// assert_eq!(degrees_to_radians(180.0), std::f64::consts::PI);
/// ```
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Converts radians to degrees.
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

/// Converts kilometers to miles.
pub fn kilometers_to_miles(kilometers: f64) -> f64 {
    kilometers * MILES_PER_KILOMETER
}

/// Converts miles to kilometers.
pub fn miles_to_kilometers(miles: f64) -> f64 {
    miles / MILES_PER_KILOMETER
}

/// Converts meters to feet.
pub fn meters_to_feet(meters: f64) -> f64 {
    meters * FEET_PER_METER
}

/// Converts feet to meters.
pub fn feet_to_meters(feet: f64) -> f64 {
    feet / FEET_PER_METER
}

/// Converts centimeters to inches.
pub fn centimeters_to_inches(centimeters: f64) -> f64 {
    centimeters / CENTIMETERS_PER_INCH
}

/// Converts inches to centimeters.
pub fn inches_to_centimeters(inches: f64) -> f64 {
    inches * CENTIMETERS_PER_INCH
}

/// Converts degrees Celsius to degrees Fahrenheit.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Converts degrees Fahrenheit to degrees Celsius.
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Converts kilometers per hour to miles per hour.
pub fn kilometers_per_hour_to_miles_per_hour(kmh: f64) -> f64 {
    kmh / KILOMETERS_PER_MILE
}

/// Converts miles per hour to kilometers per hour.
pub fn miles_per_hour_to_kilometers_per_hour(mph: f64) -> f64 {
    mph * KILOMETERS_PER_MILE
}
