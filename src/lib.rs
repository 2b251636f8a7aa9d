//! ZakaHaceCosas utility collection
//!
//! A grab bag of small, well-tested helpers: string normalization and
//! formatting, number predicates and unit conversions, combinatorics,
//! geographic distances, HTTP plumbing, random selection, and benchmark
//! ratios.
//!
//! # Features
//!
//! - **Strings**: a fixed normalization pipeline (accents, whitespace,
//!   casing, ANSI escapes) plus case conversions, masking, slugs, and a
//!   box-drawing table renderer
//! - **Numbers**: predicates, rounding, aggregates, unit conversions, and
//!   closed-form combinatorics with a rule-driven dispatcher
//! - **Geo**: Haversine distances, degree/DMS conversion, coordinate checks
//! - **HTTP**: query strings, cookies, and thin request/timeout/download
//!   wrappers over a shared client
//! - **Entity**: random picks and shuffles over slices and maps
//! - **Perf**: "how much faster did it get" calculators
//!
//! # Quick Start
//!
//! ```rust
//! use zaka_utils::geo::{haversine_distance, Point};
//! use zaka_utils::number::round_to;
//! use zaka_utils::string::{normalize, NormalizeOptions};
//!
//! let query = normalize("  mY  sEaRcH  qUÉry ", &NormalizeOptions::default());
//! assert_eq!(query, "my search query");
//!
//! let madrid = Point { lat: 40.4168, lon: -3.7038 };
//! let warsaw = Point { lat: 52.2297, lon: 21.0122 };
//! assert_eq!(round_to(haversine_distance(&madrid, &warsaw), 0), 2290.0);
//! ```

/// Crate version constant
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod error;
pub mod number;
pub mod string;

// Domain modules
pub mod entity;
pub mod geo;
pub mod http;
pub mod perf;

// Re-exports for convenience
pub use error::{Result, UtilsError};
pub use geo::{Dms, Point};
pub use http::HttpResponse;
pub use number::combinatorics::{possibilities, ComboSize, PossibilitySettings};
pub use string::{
    normalize, table, validate, ArrayNormalization, FlagOptions, MaskOptions, NormalizeOptions,
    StringArray,
};
