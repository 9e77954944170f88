//! End-to-end properties of the NOAA position that hold independent of reference tables.

use noaa_solar::noaa::{self, series};
use noaa_solar::time::{self, LocalDateTime, Weekday};
use noaa_solar::{Error, SunPosition, TimePrecision};

fn datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> LocalDateTime {
    LocalDateTime::new(y, mo, d, h, mi, s).unwrap()
}

#[test]
fn test_calendar_helpers() {
    assert!(time::is_leap_year(2000));
    assert!(!time::is_leap_year(1900));
    assert!(time::is_leap_year(2024));
    assert!(!time::is_leap_year(2023));

    assert_eq!(time::julian_day(2000, 1, 1), 2_451_544.5);
    assert_eq!(time::day_of_week(2_451_544.5), Weekday::Saturday);
    assert_eq!(datetime(2000, 1, 1, 12, 0, 0).weekday(), Weekday::Saturday);
}

#[test]
fn test_polar_latitudes_are_clamped() {
    let dt = datetime(2011, 6, 21, 12, 0, 0);
    for (near_pole, limit) in [(89.95, 89.8), (90.0, 89.8), (-89.95, -89.8), (-90.0, -89.8)] {
        let clamped = noaa::sun_position(near_pole, 0.0, 0.0, false, &dt).unwrap();
        let at_limit = noaa::sun_position(limit, 0.0, 0.0, false, &dt).unwrap();
        assert_eq!(clamped, at_limit, "latitude {near_pole}");
    }
}

#[test]
fn test_out_of_range_zones_behave_as_utc() {
    let dt = datetime(2015, 9, 1, 14, 20, 0);
    let utc = noaa::sun_position(47.37, 8.54, 0.0, false, &dt).unwrap();
    for zone in [13.0, -13.0, 24.0, -12.75] {
        let pos = noaa::sun_position(47.37, 8.54, zone, false, &dt).unwrap();
        assert_eq!(pos, utc, "zone {zone}");
    }
    let edge = noaa::sun_position(47.37, 8.54, -12.5, false, &dt).unwrap();
    assert_ne!(edge, utc);
}

#[test]
fn test_daily_maximum_elevation_close_to_meridian_altitude() {
    let mut highest: Option<SunPosition> = None;
    for minutes in (0..1440).step_by(10) {
        let dt = datetime(2011, 6, 21, minutes / 60, minutes % 60, 0);
        let pos = noaa::sun_position(50.951533, 6.91728, 1.0, true, &dt).unwrap();
        if pos.elevation() > highest.and_then(|h| h.elevation()) {
            highest = Some(pos);
        }
    }
    let highest = highest.unwrap();

    assert!((highest.declination() - 23.44).abs() < 0.5);
    let meridian_altitude = 90.0 - (50.951533 - highest.declination()).abs();
    let elevation = highest.elevation().unwrap();
    assert!(
        (elevation - meridian_altitude).abs() < 0.5,
        "elevation {elevation} vs {meridian_altitude}"
    );
    let azimuth = highest.azimuth().unwrap();
    assert!((azimuth - 180.0).abs() < 5.0, "azimuth {azimuth}");
}

#[test]
fn test_equinox_declination_near_zero() {
    let dt = datetime(2011, 3, 20, 12, 0, 0);
    let pos = noaa::sun_position(0.0, 0.0, 0.0, false, &dt).unwrap();
    assert_eq!(pos.declination(), -0.19);
    assert!(pos.elevation().unwrap() > 85.0);
}

#[test]
fn test_outputs_are_floored() {
    let dt = datetime(2020, 1, 15, 9, 30, 15);
    let pos = noaa::sun_position(-33.8688, 151.2093, 10.0, false, &dt).unwrap();

    let hundredths = |v: f64| (v * 100.0).round() / 100.0;
    assert_eq!(pos.declination(), hundredths(pos.declination()));
    assert_eq!(pos.equation_of_time(), hundredths(pos.equation_of_time()));
    assert_eq!(pos.azimuth(), pos.azimuth().map(hundredths));
    assert_eq!(pos.elevation(), pos.elevation().map(hundredths));

    let cz = pos.cosine_zenith();
    assert_eq!(cz, (cz * 10_000.0).round() / 10_000.0);
}

#[test]
fn test_unreported_positions_have_zero_cosine() {
    let mut hour = 0;
    let mut unreported = 0;
    while hour < 24 {
        let dt = datetime(2023, 12, 1, hour, 0, 0);
        let pos = noaa::sun_position(59.91, 10.75, 1.0, false, &dt).unwrap();
        let cz = pos.cosine_zenith();
        assert!((-1.0..=1.0).contains(&cz));

        if pos.is_reported() {
            assert_eq!(pos.azimuth().is_some(), pos.elevation().is_some());
        } else {
            unreported += 1;
            assert_eq!(cz, 0.0);
            assert_eq!(pos.azimuth(), None);
            assert_eq!(pos.elevation(), None);
        }
        if !pos.is_sun_up() {
            assert_eq!(cz, 0.0);
        }
        hour += 1;
    }
    // Oslo in December is deeper than 18° below the horizon around midnight
    assert!(unreported > 0);
}

#[test]
fn test_sentinel_compatibility() {
    let dt = datetime(2011, 12, 21, 0, 0, 0);
    let pos = noaa::sun_position(50.0, 0.0, 0.0, false, &dt).unwrap();
    let rebuilt = SunPosition::from_sentinels(
        pos.equation_of_time(),
        pos.declination(),
        pos.elevation_or_sentinel(),
        pos.azimuth_or_sentinel(),
        pos.cosine_zenith(),
    );
    assert_eq!(rebuilt, pos);
}

#[test]
fn test_split_calculation_matches_direct_for_grid() {
    let dt = datetime(2024, 3, 20, 8, 15, 0);
    for precision in [TimePrecision::Legacy, TimePrecision::Exact] {
        let parts = noaa::time_dependent_parts(2.0, false, &dt, precision).unwrap();
        for lat in [-60.0, -20.0, 0.0, 35.5, 70.0] {
            for lon in [-150.0, -45.0, 0.0, 25.0, 120.0] {
                let direct =
                    noaa::sun_position_with_precision(lat, lon, 2.0, false, &dt, precision)
                        .unwrap();
                let split = noaa::sun_position_with_time_dependent_parts(lat, lon, &parts).unwrap();
                assert_eq!(direct, split, "lat {lat} lon {lon} {precision:?}");
            }
        }
    }
}

#[test]
fn test_ephemeris_matches_series() {
    let t = time::julian_centuries_since_j2000(2_455_733.5);
    let eph = noaa::SunEphemeris::at_julian_century(t);
    assert_eq!(eph.declination(), series::sun_declination(t));
    assert_eq!(eph.equation_of_time(), series::equation_of_time(t));
    assert_eq!(eph.radius_vector(), series::sun_radius_vector(t));
}

#[test]
fn test_invalid_inputs() {
    assert!(matches!(
        LocalDateTime::new(2023, 2, 29, 0, 0, 0),
        Err(Error::InvalidDateTime { .. })
    ));
    assert!(LocalDateTime::new(2024, 2, 29, 0, 0, 0).is_ok());
    assert!(LocalDateTime::new(2024, 13, 1, 0, 0, 0).is_err());
    assert!(LocalDateTime::new(2024, 1, 1, 24, 0, 0).is_err());

    let dt = datetime(2024, 1, 1, 12, 0, 0);
    assert!(matches!(
        noaa::sun_position(f64::NAN, 0.0, 0.0, false, &dt),
        Err(Error::InvalidLatitude { .. })
    ));
    assert!(matches!(
        noaa::sun_position(0.0, f64::NEG_INFINITY, 0.0, false, &dt),
        Err(Error::InvalidLongitude { .. })
    ));
    assert!(matches!(
        noaa::sun_position(0.0, 0.0, f64::INFINITY, false, &dt),
        Err(Error::InvalidUtcOffset { .. })
    ));
}

#[cfg(feature = "chrono")]
#[test]
fn test_chrono_input_matches_local_datetime() {
    use chrono::NaiveDate;

    let naive = NaiveDate::from_ymd_opt(2019, 7, 4)
        .unwrap()
        .and_hms_opt(18, 45, 30)
        .unwrap();
    let from_chrono = noaa::sun_position_at(40.7128, -74.006, -5.0, true, &naive).unwrap();
    let direct =
        noaa::sun_position(40.7128, -74.006, -5.0, true, &datetime(2019, 7, 4, 18, 45, 30))
            .unwrap();
    assert_eq!(from_chrono, direct);
}
