//! Truncated solar series of the NOAA calculator.
//!
//! Every function takes `t`, Julian centuries since J2000.0 (see
//! [`julian_centuries_since_j2000`](crate::time::julian_centuries_since_j2000)), and is
//! evaluated from scratch; nothing is cached. Angles are in degrees on both sides of
//! each call.
//!
//! Coefficients are from Meeus, "Astronomical Algorithms", chapter 25 (low accuracy
//! solar coordinates), as used by the NOAA Global Monitoring Laboratory solar calculator.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use crate::math::{
    asin, atan2, cos, degrees_to_radians, normalize_degrees_0_to_360, radians_to_degrees, sin,
    tan,
};

/// Longitude of the ascending node of the moon's orbit, used for the nutation and
/// aberration terms.
fn moon_ascending_node(t: f64) -> f64 {
    125.04 - 1934.136 * t
}

/// Geometric mean anomaly of the sun in degrees.
#[must_use]
pub fn sun_mean_anomaly(t: f64) -> f64 {
    357.52911 + t * (35999.05029 - 0.0001537 * t)
}

/// Equation of center of the sun in degrees.
#[must_use]
pub fn sun_equation_of_center(t: f64) -> f64 {
    equation_of_center_for(t, sun_mean_anomaly(t))
}

pub(crate) fn equation_of_center_for(t: f64, mean_anomaly: f64) -> f64 {
    let m = degrees_to_radians(mean_anomaly);
    let sin_m = sin(m);
    let sin_2m = sin(m + m);
    let sin_3m = sin(m + m + m);

    sin_m * (1.914602 - t * (0.004817 + 0.000014 * t))
        + sin_2m * (0.019993 - 0.000101 * t)
        + sin_3m * 0.000289
}

/// True anomaly of the sun in degrees.
#[must_use]
pub fn sun_true_anomaly(t: f64) -> f64 {
    sun_mean_anomaly(t) + sun_equation_of_center(t)
}

/// Eccentricity of Earth's orbit (unitless).
#[must_use]
pub fn earth_orbit_eccentricity(t: f64) -> f64 {
    0.016708634 - t * (0.000042037 + 0.0000001267 * t)
}

/// Distance from Earth to the sun in astronomical units.
#[must_use]
pub fn sun_radius_vector(t: f64) -> f64 {
    radius_vector_for(earth_orbit_eccentricity(t), sun_true_anomaly(t))
}

pub(crate) fn radius_vector_for(eccentricity: f64, true_anomaly: f64) -> f64 {
    let e = eccentricity;
    (1.000001018 * (1.0 - e * e)) / (1.0 + e * cos(degrees_to_radians(true_anomaly)))
}

/// Geometric mean longitude of the sun in degrees, normalized to [0, 360).
#[must_use]
pub fn sun_mean_longitude(t: f64) -> f64 {
    normalize_degrees_0_to_360(280.46646 + t * (36000.76983 + 0.0003032 * t))
}

/// True longitude of the sun in degrees.
#[must_use]
pub fn sun_true_longitude(t: f64) -> f64 {
    sun_mean_longitude(t) + sun_equation_of_center(t)
}

/// Apparent longitude of the sun in degrees (true longitude corrected for nutation and
/// aberration).
#[must_use]
pub fn sun_apparent_longitude(t: f64) -> f64 {
    apparent_longitude_for(t, sun_true_longitude(t))
}

pub(crate) fn apparent_longitude_for(t: f64, true_longitude: f64) -> f64 {
    let omega = moon_ascending_node(t);
    true_longitude - 0.00569 - 0.00478 * sin(degrees_to_radians(omega))
}

/// Mean obliquity of the ecliptic in degrees.
#[must_use]
pub fn mean_obliquity_of_ecliptic(t: f64) -> f64 {
    let seconds = 21.448 - t * (46.8150 + t * (0.00059 - t * 0.001813));
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

/// Obliquity of the ecliptic corrected for nutation, in degrees.
#[must_use]
pub fn corrected_obliquity(t: f64) -> f64 {
    let omega = moon_ascending_node(t);
    mean_obliquity_of_ecliptic(t) + 0.00256 * cos(degrees_to_radians(omega))
}

/// Apparent right ascension of the sun in degrees, in (-180, 180].
#[must_use]
pub fn sun_right_ascension(t: f64) -> f64 {
    right_ascension_for(corrected_obliquity(t), sun_apparent_longitude(t))
}

pub(crate) fn right_ascension_for(obliquity: f64, apparent_longitude: f64) -> f64 {
    let epsilon = degrees_to_radians(obliquity);
    let lambda = degrees_to_radians(apparent_longitude);
    radians_to_degrees(atan2(cos(epsilon) * sin(lambda), cos(lambda)))
}

/// Apparent declination of the sun in degrees.
#[must_use]
pub fn sun_declination(t: f64) -> f64 {
    declination_for(corrected_obliquity(t), sun_apparent_longitude(t))
}

pub(crate) fn declination_for(obliquity: f64, apparent_longitude: f64) -> f64 {
    let epsilon = degrees_to_radians(obliquity);
    let lambda = degrees_to_radians(apparent_longitude);
    radians_to_degrees(asin(sin(epsilon) * sin(lambda)))
}

/// Equation of time in minutes of time (apparent minus mean solar time).
#[must_use]
pub fn equation_of_time(t: f64) -> f64 {
    equation_of_time_for(
        corrected_obliquity(t),
        sun_mean_longitude(t),
        earth_orbit_eccentricity(t),
        sun_mean_anomaly(t),
    )
}

/// Equation of time in minutes from obliquity, mean longitude, eccentricity and mean
/// anomaly, all angles in degrees.
pub(crate) fn equation_of_time_for(
    obliquity: f64,
    mean_longitude: f64,
    eccentricity: f64,
    mean_anomaly: f64,
) -> f64 {
    let l0 = degrees_to_radians(mean_longitude);
    let e = eccentricity;
    let m = degrees_to_radians(mean_anomaly);

    let y = tan(degrees_to_radians(obliquity) / 2.0);
    let y = y * y;

    let sin_2l0 = sin(2.0 * l0);
    let sin_m = sin(m);
    let cos_2l0 = cos(2.0 * l0);
    let sin_4l0 = sin(4.0 * l0);
    let sin_2m = sin(2.0 * m);

    let e_time = y * sin_2l0 - 2.0 * e * sin_m + 4.0 * e * y * sin_m * cos_2l0
        - 0.5 * y * y * sin_4l0
        - 1.25 * e * e * sin_2m;

    radians_to_degrees(e_time) * 4.0
}
