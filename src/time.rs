//! Calendar and Julian Day calculations.
//!
//! Follows the NOAA solar calculator, which assumes the proleptic Gregorian calendar
//! throughout and returns Julian Days for the start of the civil day.

#![allow(clippy::unreadable_literal)]

use crate::math::floor;
use crate::{Error, Result};
use core::fmt;
#[cfg(feature = "chrono")]
use chrono::{Datelike, NaiveDateTime, Timelike};

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Day at 0h UT of the given calendar date.
///
/// January and February count as months 13 and 14 of the previous year. The Gregorian
/// correction is applied to every date, so dates before October 1582 are read as
/// proleptic Gregorian. Fractional days are added by the caller.
///
/// # Example
/// ```
/// # use noaa_solar::time::julian_day;
/// assert_eq!(julian_day(2000, 1, 1), 2_451_544.5);
/// ```
#[must_use]
pub fn julian_day(year: i32, month: u32, day: u32) -> f64 {
    let mut y = f64::from(year);
    let mut m = f64::from(month);
    if month <= 2 {
        y -= 1.0;
        m += 12.0;
    }

    let a = floor(y / 100.0);
    let b = 2.0 - a + floor(a / 4.0);

    floor(365.25 * (y + 4716.0)) + floor(30.6001 * (m + 1.0)) + f64::from(day) + b - 1524.5
}

/// Converts a Julian Day to Julian centuries since J2000.0.
#[must_use]
pub fn julian_centuries_since_j2000(julian_day: f64) -> f64 {
    (julian_day - J2000_JDN) / DAYS_PER_CENTURY
}

/// Ordinal day of the year (1-based) from month, day and leap-year flag.
#[must_use]
pub fn day_of_year(month: u32, day: u32, is_leap: bool) -> f64 {
    let k = if is_leap { 1.0 } else { 2.0 };
    floor(275.0 * f64::from(month) / 9.0) - k * floor((f64::from(month) + 9.0) / 12.0)
        + f64::from(day)
        - 30.0
}

/// Day of the week for a Julian Day.
///
/// The fraction of the day is ignored, so any instant of a civil day maps to that day.
/// `julian_day` must be finite; NaN and infinities have no weekday and fail a debug
/// assertion (release builds return an unspecified day).
///
/// # Example
/// ```
/// # use noaa_solar::time::{day_of_week, julian_day, Weekday};
/// assert_eq!(day_of_week(julian_day(2000, 1, 1)), Weekday::Saturday);
/// ```
#[must_use]
pub fn day_of_week(julian_day: f64) -> Weekday {
    debug_assert!(julian_day.is_finite(), "Julian Day must be finite, got {julian_day}");
    let mut index = floor(julian_day + 1.5) % 7.0;
    if index < 0.0 {
        index += 7.0;
    }
    Weekday::from_index(index as u8)
}

/// Gregorian leap-year rule.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month of the proleptic Gregorian calendar.
///
/// # Errors
/// Returns `InvalidDateTime` if month is outside 1-12.
pub const fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => return Err(Error::invalid_datetime("month must be between 1 and 12")),
    };
    Ok(days)
}

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weekday {
    /// Sunday
    Sunday,
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
}

impl Weekday {
    /// Maps 0 to Sunday through 6 to Saturday.
    const fn from_index(index: u8) -> Self {
        debug_assert!(index < 7);
        match index {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }

    /// English name of the day.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Local civil date and time, as read from a wall clock.
///
/// Only constructed through validation, so every instance yields finite Julian Days.
///
/// # Example
/// ```
/// # use noaa_solar::time::LocalDateTime;
/// let noon = LocalDateTime::new(2011, 6, 21, 12, 0, 0).unwrap();
/// assert_eq!(noon.hour(), 12);
/// assert!(LocalDateTime::new(2011, 2, 29, 12, 0, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawLocalDateTime"))]
pub struct LocalDateTime {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

impl LocalDateTime {
    /// Creates a validated local date and time.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if any field is outside its range (month 1-12, day within
    /// the month, hour 0-23, minute 0-59, second 0-59).
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self> {
        let max_day = days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }
        if hour > 23 {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        if second > 59 {
            return Err(Error::invalid_datetime("second must be between 0 and 59"));
        }

        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Converts any chrono date-time with clock fields.
    ///
    /// chrono keeps a leap second at second 59 with an oversized nanosecond field, so it
    /// reads as 23:59:59 here. Sub-second parts are dropped.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_naive(datetime: &NaiveDateTime) -> Self {
        Self {
            year: datetime.year(),
            month: datetime.month(),
            day: datetime.day(),
            hour: datetime.hour(),
            minute: datetime.minute(),
            second: datetime.second(),
        }
    }

    /// Calendar year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Day of month.
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Hour (0-23).
    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Minute (0-59).
    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Second (0-59).
    #[must_use]
    pub const fn second(&self) -> u32 {
        self.second
    }

    /// Julian Day at the start of this date.
    #[must_use]
    pub fn julian_day(&self) -> f64 {
        julian_day(self.year, self.month, self.day)
    }

    /// Ordinal day of the year.
    #[must_use]
    pub fn day_of_year(&self) -> f64 {
        day_of_year(self.month, self.day, is_leap_year(self.year))
    }

    /// Day of the week of this date.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        day_of_week(self.julian_day())
    }
}

/// Unchecked field layout of [`LocalDateTime`], validated on deserialization.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawLocalDateTime {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLocalDateTime> for LocalDateTime {
    type Error = Error;

    fn try_from(raw: RawLocalDateTime) -> Result<Self> {
        Self::new(raw.year, raw.month, raw.day, raw.hour, raw.minute, raw.second)
    }
}

#[cfg(feature = "chrono")]
impl From<NaiveDateTime> for LocalDateTime {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::from_naive(&datetime)
    }
}
