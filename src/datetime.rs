//! # Date and Time Fields
//!
//! Protocol-level representations of the `ddmmyy` and `hhmmss.sss` stamps,
//! kept raw at decode time (no calendar validation, two-digit year), plus
//! the converter that turns a decoded pair into a validated UTC instant.

use nom::{
    Parser,
    character::complete::{char, digit1},
    combinator::opt,
    sequence::preceded,
};
use time::{Month, OffsetDateTime, PrimitiveDateTime, error::ComponentRange};

use crate::{IResult, Scan, scan::two_digits};

/// A `ddmmyy` date field.
///
/// The two-digit year is the NMEA convention and is interpreted as 2000+yy
/// by [`Date::full_year`] and the converter; dates before 2000 cannot be
/// represented.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    pub day: u8,
    pub month: u8,
    /// Two-digit year offset from 2000
    pub year: u8,
}

impl Date {
    /// The calendar year, `2000 + yy`.
    pub fn full_year(self) -> i32 {
        2000 + i32::from(self.year)
    }

    /// Combines this date with a time-of-day into a UTC instant.
    ///
    /// Fails when the pair is not a valid calendar instant (month outside
    /// 1–12, day out of range for the month, hour/minute/second/microsecond
    /// out of range). The result carries whole seconds
    /// ([`OffsetDateTime::unix_timestamp`]) and sub-second precision
    /// separately ([`OffsetDateTime::microsecond`]).
    ///
    /// ```rust
    /// use nmea0183_decoder::{Date, Time};
    ///
    /// let date = Date { day: 4, month: 5, year: 23 };
    /// let time = Time { hours: 12, minutes: 30, seconds: 45, microseconds: 123456 };
    /// let instant = date.with_time(time)?;
    /// assert_eq!(instant.unix_timestamp(), 1683203445);
    /// assert_eq!(instant.microsecond(), 123456);
    /// # Ok::<(), time::error::ComponentRange>(())
    /// ```
    pub fn with_time(self, time: Time) -> Result<OffsetDateTime, ComponentRange> {
        let month = Month::try_from(self.month)?;
        let date = time::Date::from_calendar_date(self.full_year(), month, self.day)?;
        let time = time::Time::from_hms_micro(
            time.hours,
            time.minutes,
            time.seconds,
            time.microseconds,
        )?;
        Ok(PrimitiveDateTime::new(date, time).assume_utc())
    }
}

impl Scan for Date {
    fn scan(i: &str) -> IResult<&str, Self> {
        let (i, day) = two_digits(i)?;
        let (i, month) = two_digits(i)?;
        let (i, year) = two_digits(i)?;
        Ok((i, Date { day, month, year }))
    }
}

/// An `hhmmss[.sss…]` time-of-day field.
///
/// The fractional part is normalized to microseconds whatever its digit
/// count: fewer than six digits scale up, further digits are truncated.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Time {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub microseconds: u32,
}

impl Scan for Time {
    fn scan(i: &str) -> IResult<&str, Self> {
        let (i, hours) = two_digits(i)?;
        let (i, minutes) = two_digits(i)?;
        let (i, seconds) = two_digits(i)?;
        let (i, frac) = opt(preceded(char('.'), digit1)).parse(i)?;

        Ok((
            i,
            Time {
                hours,
                minutes,
                seconds,
                microseconds: frac.map_or(0, microseconds),
            },
        ))
    }
}

fn microseconds(digits: &str) -> u32 {
    let mut value = 0u32;
    let mut count = 0u32;
    for byte in digits.bytes().take(6) {
        value = value * 10 + u32::from(byte - b'0');
        count += 1;
    }
    value * 10u32.pow(6 - count)
}
