//! Error types for the NOAA solar position library.
//!
//! The algorithm itself never fails: latitudes, UTC offsets and hours are clamped or
//! normalized, and geometric degeneracies are branched around. Errors only guard the
//! boundary against input that would otherwise turn into NaN.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur when preparing a solar position calculation.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Latitude is not a finite number.
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Longitude is not a finite number.
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// UTC offset is not a finite number.
    InvalidUtcOffset {
        /// The invalid offset in hours.
        value: f64,
    },
    /// A calendar or clock field is out of range.
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(f, "invalid latitude {value}° (must be a finite number)")
            }
            Self::InvalidLongitude { value } => {
                write!(f, "invalid longitude {value}° (must be a finite number)")
            }
            Self::InvalidUtcOffset { value } => {
                write!(f, "invalid UTC offset {value} h (must be a finite number)")
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid UTC offset error.
    #[must_use]
    pub const fn invalid_utc_offset(value: f64) -> Self {
        Self::InvalidUtcOffset { value }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }
}

/// Validates that latitude and longitude are finite.
///
/// Range is not checked: polar latitudes are clamped by the calculator and values
/// beyond ±90° are passed through as the reference algorithm does.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for NaN or infinite coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    if !latitude.is_finite() {
        return Err(Error::invalid_latitude(latitude));
    }
    if !longitude.is_finite() {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates that the UTC offset is finite.
///
/// # Errors
/// Returns `InvalidUtcOffset` for NaN or infinite offsets.
pub fn check_utc_offset(utc_offset_hours: f64) -> Result<()> {
    if !utc_offset_hours.is_finite() {
        return Err(Error::invalid_utc_offset(utc_offset_hours));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_validation() {
        assert!(check_coordinates(0.0, 0.0).is_ok());
        assert!(check_coordinates(90.0, 180.0).is_ok());
        // out of range is tolerated, only non-finite input is rejected
        assert!(check_coordinates(120.0, 540.0).is_ok());

        assert_eq!(
            check_coordinates(f64::INFINITY, 0.0),
            Err(Error::invalid_latitude(f64::INFINITY))
        );
        assert!(matches!(
            check_coordinates(f64::NAN, 0.0),
            Err(Error::InvalidLatitude { .. })
        ));
        assert!(matches!(
            check_coordinates(0.0, f64::NEG_INFINITY),
            Err(Error::InvalidLongitude { .. })
        ));
    }

    #[test]
    fn test_utc_offset_validation() {
        assert!(check_utc_offset(5.5).is_ok());
        assert!(check_utc_offset(14.0).is_ok());
        assert!(check_utc_offset(f64::NAN).is_err());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_error_display() {
        let err = Error::invalid_latitude(f64::INFINITY);
        assert_eq!(
            err.to_string(),
            "invalid latitude inf° (must be a finite number)"
        );

        let err = Error::invalid_datetime("month must be between 1 and 12");
        assert_eq!(
            err.to_string(),
            "invalid date/time: month must be between 1 and 12"
        );
    }
}
