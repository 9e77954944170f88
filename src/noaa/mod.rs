//! NOAA solar position algorithm.
//!
//! Combines the truncated solar series in [`series`] with the observer's latitude,
//! longitude and clock into azimuth, refraction-corrected elevation and the cosine of
//! the zenith angle, as the NOAA Global Monitoring Laboratory solar calculator does.
//! Accuracy is well below one arcminute for dates within a few centuries of J2000.0.
//!
//! The calculator reproduces the published output digit for digit, including its
//! quirks: results are floored rather than rounded, the UTC hour fed to the ephemeris
//! ignores minutes and seconds unless [`TimePrecision::Exact`] is requested, and true
//! solar time only wraps downwards.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::suboptimal_flops)]

pub mod series;

use crate::error::{check_coordinates, check_utc_offset};
use crate::math::{acos, cos, degrees_to_radians, floor_to_decimals, radians_to_degrees, sin, tan};
use crate::time::{LocalDateTime, julian_centuries_since_j2000};
use crate::{Result, SunPosition, TimePrecision};

#[cfg(feature = "chrono")]
use chrono::NaiveDateTime;

/// Zenith angle beyond which no horizontal position is reported (sun 18° below the
/// horizon).
pub const ASTRONOMICAL_TWILIGHT_ZENITH: f64 = 108.0;

/// Latitudes closer to a pole than this are moved to it.
const POLAR_LATITUDE_LIMIT: f64 = 89.8;

/// Minutes per day.
const MINUTES_PER_DAY: f64 = 1440.0;

/// Calculate the sun's position for a local wall-clock time.
///
/// `utc_offset_hours` is the standard-time zone of the clock (e.g. `1.0` for Central
/// Europe); `daylight_saving` tells whether the clock is running one hour ahead of it.
///
/// Inputs are normalized rather than rejected: latitudes within 0.2° of a pole are
/// moved to ±89.8°, offsets outside [-12.5, 12] are treated as 0. Only non-finite
/// numbers are errors.
///
/// # Errors
/// Returns error for NaN or infinite latitude, longitude or UTC offset.
///
/// # Example
/// ```
/// use noaa_solar::{noaa, time::LocalDateTime};
///
/// // Cologne, summer solstice 2011, noon CEST
/// let noon = LocalDateTime::new(2011, 6, 21, 12, 0, 0).unwrap();
/// let position = noaa::sun_position(50.951533, 6.91728, 1.0, true, &noon).unwrap();
///
/// assert_eq!(position.declination(), 23.43);
/// assert_eq!(position.elevation(), Some(61.91));
/// assert_eq!(position.azimuth(), Some(165.57));
/// ```
pub fn sun_position(
    latitude: f64,
    longitude: f64,
    utc_offset_hours: f64,
    daylight_saving: bool,
    datetime: &LocalDateTime,
) -> Result<SunPosition> {
    sun_position_with_precision(
        latitude,
        longitude,
        utc_offset_hours,
        daylight_saving,
        datetime,
        TimePrecision::Legacy,
    )
}

/// Calculate the sun's position, choosing how minutes and seconds reach the ephemeris.
///
/// # Errors
/// Returns error for NaN or infinite latitude, longitude or UTC offset.
pub fn sun_position_with_precision(
    latitude: f64,
    longitude: f64,
    utc_offset_hours: f64,
    daylight_saving: bool,
    datetime: &LocalDateTime,
    precision: TimePrecision,
) -> Result<SunPosition> {
    let parts = time_dependent_parts(utc_offset_hours, daylight_saving, datetime, precision)?;
    sun_position_with_time_dependent_parts(latitude, longitude, &parts)
}

/// Calculate the sun's position from a chrono date-time read as local wall-clock time.
///
/// # Errors
/// Returns error for NaN or infinite latitude, longitude or UTC offset.
#[cfg(feature = "chrono")]
pub fn sun_position_at(
    latitude: f64,
    longitude: f64,
    utc_offset_hours: f64,
    daylight_saving: bool,
    datetime: &NaiveDateTime,
) -> Result<SunPosition> {
    sun_position(
        latitude,
        longitude,
        utc_offset_hours,
        daylight_saving,
        &LocalDateTime::from_naive(datetime),
    )
}

/// Sun coordinates for one instant, independent of the observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunEphemeris {
    julian_century: f64,
    declination: f64,
    equation_of_time: f64,
    right_ascension: f64,
    apparent_longitude: f64,
    radius_vector: f64,
}

impl SunEphemeris {
    /// Evaluates the solar series at `t` Julian centuries since J2000.0.
    ///
    /// Each intermediate term is computed once; the results equal the individual
    /// [`series`] functions bit for bit.
    #[must_use]
    pub fn at_julian_century(t: f64) -> Self {
        let mean_anomaly = series::sun_mean_anomaly(t);
        let center = series::equation_of_center_for(t, mean_anomaly);
        let mean_longitude = series::sun_mean_longitude(t);
        let eccentricity = series::earth_orbit_eccentricity(t);
        let obliquity = series::corrected_obliquity(t);
        let apparent_longitude = series::apparent_longitude_for(t, mean_longitude + center);

        Self {
            julian_century: t,
            declination: series::declination_for(obliquity, apparent_longitude),
            equation_of_time: series::equation_of_time_for(
                obliquity,
                mean_longitude,
                eccentricity,
                mean_anomaly,
            ),
            right_ascension: series::right_ascension_for(obliquity, apparent_longitude),
            apparent_longitude,
            radius_vector: series::radius_vector_for(eccentricity, mean_anomaly + center),
        }
    }

    /// Evaluates the solar series at a (fractional) Julian Day.
    #[must_use]
    pub fn at_julian_day(julian_day: f64) -> Self {
        Self::at_julian_century(julian_centuries_since_j2000(julian_day))
    }

    /// Julian centuries since J2000.0.
    #[must_use]
    pub const fn julian_century(&self) -> f64 {
        self.julian_century
    }

    /// Declination in degrees (unrounded).
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Equation of time in minutes (unrounded).
    #[must_use]
    pub const fn equation_of_time(&self) -> f64 {
        self.equation_of_time
    }

    /// Right ascension in degrees, in (-180, 180].
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Apparent ecliptic longitude in degrees.
    #[must_use]
    pub const fn apparent_longitude(&self) -> f64 {
        self.apparent_longitude
    }

    /// Earth-sun distance in AU.
    #[must_use]
    pub const fn radius_vector(&self) -> f64 {
        self.radius_vector
    }
}

/// Time-dependent parts of a position calculation, reusable across many locations
/// sharing the same clock reading and time zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeDependent {
    /// UTC offset after normalization
    utc_offset_hours: f64,
    /// Local hour after daylight-saving adjustment, may be -1
    hour: i32,
    minute: f64,
    second: f64,
    ephemeris: SunEphemeris,
}

impl TimeDependent {
    /// Sun coordinates used for this clock reading.
    #[must_use]
    pub const fn ephemeris(&self) -> &SunEphemeris {
        &self.ephemeris
    }

    /// UTC offset in hours after normalization.
    #[must_use]
    pub const fn utc_offset_hours(&self) -> f64 {
        self.utc_offset_hours
    }
}

/// Computes the observer-independent parts of a calculation.
///
/// Daylight saving moves the clock back one hour. The hour is not wrapped upwards, so
/// 00:xx with daylight saving becomes hour -1 of the same date, as in the reference
/// calculator.
///
/// # Errors
/// Returns error for a NaN or infinite UTC offset.
pub fn time_dependent_parts(
    utc_offset_hours: f64,
    daylight_saving: bool,
    datetime: &LocalDateTime,
    precision: TimePrecision,
) -> Result<TimeDependent> {
    check_utc_offset(utc_offset_hours)?;
    let zone = normalize_utc_offset(utc_offset_hours);

    let mut hour = datetime.hour() as i32 - i32::from(daylight_saving);
    while hour > 23 {
        hour -= 24;
    }
    let minute = f64::from(datetime.minute());
    let second = f64::from(datetime.second());

    let time_now = match precision {
        TimePrecision::Legacy => f64::from(hour) + zone,
        TimePrecision::Exact => f64::from(hour) + minute / 60.0 + second / 3600.0 + zone,
    };
    let ephemeris = SunEphemeris::at_julian_day(datetime.julian_day() + time_now / 24.0);

    Ok(TimeDependent {
        utc_offset_hours: zone,
        hour,
        minute,
        second,
        ephemeris,
    })
}

/// Calculate the sun's position from precomputed time-dependent parts.
///
/// # Errors
/// Returns error for NaN or infinite latitude or longitude.
///
/// # Example
/// ```
/// use noaa_solar::{noaa, time::LocalDateTime, TimePrecision};
///
/// let datetime = LocalDateTime::new(2024, 3, 20, 12, 0, 0).unwrap();
/// let parts = noaa::time_dependent_parts(0.0, false, &datetime, TimePrecision::Legacy).unwrap();
///
/// for latitude in [-60.0, -30.0, 0.0, 30.0, 60.0] {
///     let position = noaa::sun_position_with_time_dependent_parts(latitude, 0.0, &parts).unwrap();
///     assert!(position.is_sun_up());
/// }
/// ```
pub fn sun_position_with_time_dependent_parts(
    latitude: f64,
    longitude: f64,
    parts: &TimeDependent,
) -> Result<SunPosition> {
    check_coordinates(latitude, longitude)?;
    let latitude = clamp_polar_latitude(latitude);
    let zone = parts.utc_offset_hours;
    let ephemeris = &parts.ephemeris;

    let declination = ephemeris.declination;
    let eq_time = ephemeris.equation_of_time;
    let rounded_eq_time = floor_to_decimals(eq_time, 2);
    let rounded_declination = floor_to_decimals(declination, 2);

    let solar_time_fix = eq_time - 4.0 * longitude + 60.0 * zone;
    let true_solar_time = wrap_true_solar_time(
        f64::from(parts.hour) * 60.0 + parts.minute + parts.second / 60.0 + solar_time_fix,
    );

    let mut hour_angle = true_solar_time / 4.0 - 180.0;
    if hour_angle < -180.0 {
        hour_angle += 360.0;
    }

    let lat_rad = degrees_to_radians(latitude);
    let decl_rad = degrees_to_radians(declination);

    let cos_zenith = (sin(lat_rad) * sin(decl_rad)
        + cos(lat_rad) * cos(decl_rad) * cos(degrees_to_radians(hour_angle)))
    .clamp(-1.0, 1.0);
    let zenith = radians_to_degrees(acos(cos_zenith));

    let azimuth = solar_azimuth(lat_rad, decl_rad, zenith, hour_angle, latitude);

    let solar_zenith = zenith - refraction_correction(90.0 - zenith);

    if solar_zenith >= ASTRONOMICAL_TWILIGHT_ZENITH {
        return Ok(SunPosition::below_twilight(
            rounded_eq_time,
            rounded_declination,
        ));
    }

    let cosine_zenith = if solar_zenith < 90.0 {
        floor_to_decimals(cos(degrees_to_radians(solar_zenith)), 4)
    } else {
        0.0
    };

    Ok(SunPosition::reported(
        rounded_eq_time,
        rounded_declination,
        floor_to_decimals(azimuth, 2),
        floor_to_decimals(90.0 - solar_zenith, 2),
        cosine_zenith,
    ))
}

/// Azimuth in degrees from north, clockwise.
///
/// Near the poles and with the sun at the zenith the formula degenerates; the sun is
/// then placed due south (northern hemisphere) or due north.
fn solar_azimuth(
    lat_rad: f64,
    decl_rad: f64,
    zenith: f64,
    hour_angle: f64,
    latitude: f64,
) -> f64 {
    let zenith_rad = degrees_to_radians(zenith);
    let denominator = cos(lat_rad) * sin(zenith_rad);

    let mut azimuth = if denominator.abs() > 0.001 {
        let cos_azimuth = ((sin(lat_rad) * cos(zenith_rad)) - sin(decl_rad)) / denominator;
        let azimuth = 180.0 - radians_to_degrees(acos(cos_azimuth.clamp(-1.0, 1.0)));
        if hour_angle > 0.0 { -azimuth } else { azimuth }
    } else if latitude > 0.0 {
        180.0
    } else {
        0.0
    };

    if azimuth < 0.0 {
        azimuth += 360.0;
    }
    azimuth
}

/// Wraps true solar time (minutes) down into (0, 1440].
///
/// Negative values are left alone; the hour angle correction absorbs the common case.
fn wrap_true_solar_time(minutes: f64) -> f64 {
    if minutes <= MINUTES_PER_DAY {
        return minutes;
    }
    // same result as repeatedly subtracting a day, both are exact
    let remainder = minutes % MINUTES_PER_DAY;
    if remainder == 0.0 {
        MINUTES_PER_DAY
    } else {
        remainder
    }
}

/// Atmospheric refraction in degrees for a geometric (airless) elevation in degrees.
///
/// Piecewise fit used by the NOAA calculator: none above 85°, a series in `tan e` down
/// to 5°, a quartic near the horizon and an inverse tangent below -0.575°.
#[must_use]
pub fn refraction_correction(exoatmospheric_elevation: f64) -> f64 {
    let e = exoatmospheric_elevation;
    if e > 85.0 {
        return 0.0;
    }

    let te = tan(degrees_to_radians(e));
    let arcseconds = if e > 5.0 {
        58.1 / te - 0.07 / (te * te * te) + 0.000086 / (te * te * te * te * te)
    } else if e > -0.575 {
        1735.0 + e * (-518.2 + e * (103.4 + e * (-12.79 + e * 0.711)))
    } else {
        -20.774 / te
    };
    arcseconds / 3600.0
}

/// Moves latitudes within 0.2° of a pole to ±89.8°.
///
/// Values outside [-90, 90] are returned unchanged.
#[must_use]
pub fn clamp_polar_latitude(latitude: f64) -> f64 {
    if (-90.0..-POLAR_LATITUDE_LIMIT).contains(&latitude) {
        -POLAR_LATITUDE_LIMIT
    } else if latitude > POLAR_LATITUDE_LIMIT && latitude <= 90.0 {
        POLAR_LATITUDE_LIMIT
    } else {
        latitude
    }
}

/// Treats UTC offsets outside [-12.5, 12] hours as 0.
#[must_use]
pub fn normalize_utc_offset(utc_offset_hours: f64) -> f64 {
    if utc_offset_hours > 12.0 || utc_offset_hours < -12.5 {
        0.0
    } else {
        utc_offset_hours
    }
}
