//! Geographic utility functions
//!
//! Points, degree/DMS conversion, and great-circle distances. The distance
//! functions do not validate coordinate ranges; the validity checks are
//! opt-in so a caller can work in an extended coordinate space when it
//! wants to.

use serde::{Deserialize, Serialize};

use crate::number::{degrees_to_radians, round_to};

/// Earth radius in kilometers, the average of the equatorial and polar
/// radius.
pub const EARTH_RADIUS_KILOMETERS: f64 = 6371.0;

/// A point given as latitude and longitude in degrees.
///
/// In a cartesian coordinates graph, longitude is the _x_ axis and latitude
/// the _y_ axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

/// An angle broken into degrees, minutes, and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dms {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
}

/// Calculates the great-circle distance between two points in kilometers,
/// using the Haversine formula.
///
/// # Example
///
/// ```rust
/// use zaka_utils::geo::{haversine_distance, Point};
/// use zaka_utils::number::round_to;
///
/// let a = Point { lat: 0.0, lon: 0.0 };
/// let b = Point { lat: 5.0, lon: 5.0 };
/// assert_eq!(round_to(haversine_distance(&a, &b), 1), 785.8);
/// ```
pub fn haversine_distance(from: &Point, to: &Point) -> f64 {
    let d_lat = degrees_to_radians(to.lat - from.lat);
    let d_lon = degrees_to_radians(to.lon - from.lon);
    let a = (d_lat / 2.0).sin() * (d_lat / 2.0).sin()
        + degrees_to_radians(from.lat).cos()
            * degrees_to_radians(to.lat).cos()
            * (d_lon / 2.0).sin()
            * (d_lon / 2.0).sin();
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KILOMETERS * c
}

/// Converts decimal degrees to a [`Dms`] breakdown, seconds rounded to two
/// decimals.
///
/// # Example
///
/// ```rust
/// use zaka_utils::geo::{degrees_to_dms, Dms};
///
/// assert_eq!(
///     degrees_to_dms(65.50),
///     Dms { degrees: 65.0, minutes: 30.0, seconds: 0.0 }
/// );
/// ```
pub fn degrees_to_dms(degrees: f64) -> Dms {
    let deg = degrees.floor();
    let min = ((degrees - deg) * 60.0).floor();
    let sec = round_to((degrees - deg - min / 60.0) * 3600.0, 2);
    Dms {
        degrees: deg,
        minutes: min,
        seconds: sec,
    }
}

/// Converts a [`Dms`] breakdown back to decimal degrees.
pub fn dms_to_degrees(dms: &Dms) -> f64 {
    dms.degrees + dms.minutes / 60.0 + dms.seconds / 3600.0
}

/// Checks if a value is a valid latitude (`-90..=90`, `NaN` rejected).
pub fn is_valid_lat(lat: f64) -> bool {
    !lat.is_nan() && (-90.0..=90.0).contains(&lat)
}

/// Checks if a value is a valid longitude (`-180..=180`, `NaN` rejected).
pub fn is_valid_lon(lon: f64) -> bool {
    !lon.is_nan() && (-180.0..=180.0).contains(&lon)
}

/// Checks if both coordinates of a point are in range.
pub fn is_valid_point(point: &Point) -> bool {
    is_valid_lat(point.lat) && is_valid_lon(point.lon)
}

/// Checks if two points lie within a threshold distance (in kilometers) of
/// each other, per [`haversine_distance`].
pub fn is_close(a: &Point, b: &Point, threshold_km: f64) -> bool {
    haversine_distance(a, b) <= threshold_km
}
