//! # NOAA Solar Position
//!
//! Sun position from the NOAA solar calculator: equation of time, declination, azimuth,
//! refraction-corrected elevation and the cosine of the zenith angle.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The algorithm evaluates a truncated solar series (Meeus, "Astronomical Algorithms",
//! chapter 25) for the requested instant and combines it with the observer's latitude,
//! longitude and clock. Accuracy is well below one arcminute for dates within a few
//! centuries of J2000.0. Output is floored to 2 decimal places (4 for the cosine of the
//! zenith angle), matching published NOAA calculator tables.
//!
//! ## Features
//!
//! - Pure, stateless functions: every call is independent and thread-safe
//! - Every step of the series is public for use on its own ([`noaa::series`], [`time`])
//! - Split calculation for many locations sharing one instant
//! - `no_std` support via `libm`
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `chrono` (default): Accept `chrono::NaiveDateTime` as local time
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `serde`: `Serialize`/`Deserialize` for the result and input types
//!
//! ## Quick Start
//!
//! ```rust
//! use noaa_solar::{noaa, time::LocalDateTime};
//!
//! // Cologne at local noon on the 2011 summer solstice, CET with daylight saving
//! let noon = LocalDateTime::new(2011, 6, 21, 12, 0, 0).unwrap();
//! let position = noaa::sun_position(50.951533, 6.91728, 1.0, true, &noon).unwrap();
//!
//! println!("Declination: {:.2}°", position.declination());
//! println!("Equation of time: {:.2} min", position.equation_of_time());
//! if let (Some(azimuth), Some(elevation)) = (position.azimuth(), position.elevation()) {
//!     println!("Azimuth: {azimuth:.2}°, elevation: {elevation:.2}°");
//! }
//! ```
//!
//! Once the sun is more than 18° below the horizon no azimuth or elevation is reported;
//! [`SunPosition::azimuth_or_sentinel`] and [`SunPosition::elevation_or_sentinel`] give
//! the `-1` used by older tools.
//!
//! ## Coordinate System
//!
//! - **Latitude/longitude**: degrees, north and east positive
//! - **Azimuth**: 0° = North, measured clockwise (0° to 360°)
//! - **Elevation angle**: 0° = horizon, 90° = directly overhead

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Floored outputs are compared exactly in tests
)]

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("either the `std` or the `libm` feature must be enabled");

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::math::{degrees_to_radians, radians_to_degrees};
pub use crate::noaa::{SunEphemeris, TimeDependent};
pub use crate::time::{LocalDateTime, Weekday};
pub use crate::types::{SunPosition, TimePrecision};
#[cfg(feature = "std")]
pub use crate::weather::{WeatherCondition, WeatherProvider};

// Algorithm modules
pub mod noaa;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;
#[cfg(feature = "std")]
pub mod weather;
