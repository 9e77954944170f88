//! Core data types for solar position results.

/// Value reported in place of azimuth and elevation by legacy callers once the sun is
/// below the astronomical-twilight threshold.
pub const SENTINEL: f64 = -1.0;

/// How the UTC hour used for the ephemeris is derived from the local clock.
///
/// The reference calculator adds `minute / 60` and `second / 3600` with integer
/// division, so only whole hours reach the ephemeris. The hour angle always uses the
/// full clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimePrecision {
    /// Whole hours only, reproducing published NOAA calculator output.
    #[default]
    Legacy,
    /// Minutes and seconds contribute their fractional hour.
    Exact,
}

/// Horizontal coordinates of the sun, only present while it is above the
/// astronomical-twilight threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Horizontal {
    azimuth: f64,
    elevation: f64,
}

/// Apparent position of the sun for one place and instant.
///
/// Every field is rounded towards negative infinity: equation of time, declination,
/// azimuth and elevation to 2 decimal places, cosine of the zenith angle to 4.
///
/// Azimuth is measured from north, clockwise, in [0, 360). Elevation is refraction
/// corrected.
///
/// # Example
/// ```
/// # use noaa_solar::SunPosition;
/// let legacy = SunPosition::from_sentinels(-1.71, 23.43, -1.0, -1.0, 0.0);
/// assert_eq!(legacy.azimuth(), None);
/// assert_eq!(legacy.elevation_or_sentinel(), -1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SunPosition {
    /// Equation of time in minutes
    equation_of_time: f64,
    /// Solar declination in degrees
    declination: f64,
    horizontal: Option<Horizontal>,
    /// Cosine of the refraction-corrected zenith angle, 0 at or below the horizon
    cosine_zenith: f64,
}

impl SunPosition {
    /// Position with the sun above the astronomical-twilight threshold.
    pub(crate) const fn reported(
        equation_of_time: f64,
        declination: f64,
        azimuth: f64,
        elevation: f64,
        cosine_zenith: f64,
    ) -> Self {
        Self {
            equation_of_time,
            declination,
            horizontal: Some(Horizontal { azimuth, elevation }),
            cosine_zenith,
        }
    }

    /// Position with the sun too far below the horizon to report.
    pub(crate) const fn below_twilight(equation_of_time: f64, declination: f64) -> Self {
        Self {
            equation_of_time,
            declination,
            horizontal: None,
            cosine_zenith: 0.0,
        }
    }

    /// Rebuilds a position from the legacy five-number record.
    ///
    /// An azimuth of `-1` marks the sun as not reported. Elevation alone cannot, since
    /// `-1.00` is also a genuine twilight elevation.
    #[must_use]
    pub fn from_sentinels(
        equation_of_time: f64,
        declination: f64,
        elevation: f64,
        azimuth: f64,
        cosine_zenith: f64,
    ) -> Self {
        if azimuth == SENTINEL {
            Self::below_twilight(equation_of_time, declination)
        } else {
            Self::reported(
                equation_of_time,
                declination,
                azimuth,
                elevation,
                cosine_zenith,
            )
        }
    }

    /// Equation of time in minutes (apparent minus mean solar time).
    #[must_use]
    pub const fn equation_of_time(&self) -> f64 {
        self.equation_of_time
    }

    /// Solar declination in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Azimuth in degrees, `None` below the astronomical-twilight threshold.
    #[must_use]
    pub const fn azimuth(&self) -> Option<f64> {
        match self.horizontal {
            Some(h) => Some(h.azimuth),
            None => None,
        }
    }

    /// Refraction-corrected elevation in degrees, `None` below the
    /// astronomical-twilight threshold.
    #[must_use]
    pub const fn elevation(&self) -> Option<f64> {
        match self.horizontal {
            Some(h) => Some(h.elevation),
            None => None,
        }
    }

    /// Azimuth, or `-1` when not reported.
    #[must_use]
    pub const fn azimuth_or_sentinel(&self) -> f64 {
        match self.azimuth() {
            Some(azimuth) => azimuth,
            None => SENTINEL,
        }
    }

    /// Elevation, or `-1` when not reported.
    #[must_use]
    pub const fn elevation_or_sentinel(&self) -> f64 {
        match self.elevation() {
            Some(elevation) => elevation,
            None => SENTINEL,
        }
    }

    /// Cosine of the zenith angle; exactly 0 at or below the horizon.
    #[must_use]
    pub const fn cosine_zenith(&self) -> f64 {
        self.cosine_zenith
    }

    /// Whether azimuth and elevation are reported.
    #[must_use]
    pub const fn is_reported(&self) -> bool {
        self.horizontal.is_some()
    }

    /// Checks if the sun is above the horizon (elevation angle > 0°).
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.elevation().is_some_and(|elevation| elevation > 0.0)
    }
}
