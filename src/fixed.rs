//! # Fixed-Point Values
//!
//! NMEA fractional fields are transmitted as decimal text with a variable
//! number of significant digits. Parsing them straight into floating point
//! throws that exactness away, so the decoders keep every fractional field
//! as a [`Fixed`] value: an integer paired with a power-of-ten scale.
//! `"1234.56"` decodes to exactly `value = 123456, scale = 100`.

use nom::{
    Parser,
    character::complete::{char, digit0, one_of},
    combinator::opt,
    error::ErrorKind,
    sequence::preceded,
};

use crate::{Error, IResult, Scan};

/// An exact decimal number represented as `value / scale`.
///
/// `scale == 0` is the sentinel for an unknown or absent value (an empty
/// sentence field); it converts to NaN in floating point and rescales to
/// zero. A `Fixed` is never mutated after construction.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixed {
    /// Scaled integer value
    pub value: i32,
    /// Power-of-ten denominator, `0` for unknown
    pub scale: i32,
}

impl Fixed {
    /// The unknown/absent sentinel.
    pub const UNKNOWN: Fixed = Fixed { value: 0, scale: 0 };

    pub const fn new(value: i32, scale: i32) -> Self {
        Fixed { value, scale }
    }

    /// Returns `true` for the unknown sentinel.
    pub const fn is_unknown(self) -> bool {
        self.scale == 0
    }

    /// Rescales the value to a different power-of-ten scale.
    ///
    /// Unknown values rescale to `0` and matching scales are the identity.
    /// Shrinking the scale adds the signed half-step and truncates toward
    /// zero; growing the scale multiplies exactly. The conversion is exact
    /// whenever one scale divides the other.
    ///
    /// ```rust
    /// use nmea0183_decoder::Fixed;
    ///
    /// assert_eq!(Fixed::new(123456, 100).rescale(1000), 1234560);
    /// assert_eq!(Fixed::new(-14, 10).rescale(1), -1);
    /// assert_eq!(Fixed::UNKNOWN.rescale(10), 0);
    /// ```
    pub fn rescale(self, to: i32) -> i32 {
        if self.scale == 0 {
            return 0;
        }
        if self.scale == to {
            return self.value;
        }
        if self.scale > to {
            (self.value + self.value.signum() * self.scale / to / 2) / (self.scale / to)
        } else {
            self.value * (to / self.scale)
        }
    }

    /// Converts to floating point, NaN when unknown.
    ///
    /// This is an approximation and not suitable for round-tripping; keep
    /// the `Fixed` around when exactness matters.
    pub fn to_f32(self) -> f32 {
        if self.scale == 0 {
            return f32::NAN;
        }
        self.value as f32 / self.scale as f32
    }

    /// Converts an NMEA `DDMM.MMMM` latitude/longitude to decimal degrees,
    /// NaN when unknown.
    ///
    /// ```rust
    /// use nmea0183_decoder::Fixed;
    ///
    /// // 37°51.65' south
    /// let lat = Fixed::new(-375165, 100);
    /// assert!((lat.to_coordinate() + 37.860832).abs() < 1e-4);
    /// assert!(Fixed::UNKNOWN.to_coordinate().is_nan());
    /// ```
    pub fn to_coordinate(self) -> f32 {
        if self.scale == 0 {
            return f32::NAN;
        }
        let degrees = self.value / (self.scale * 100);
        let minutes = self.value % (self.scale * 100);
        degrees as f32 + minutes as f32 / (60 * self.scale) as f32
    }

    /// Folds a direction sign (`+1`/`-1`, or `0` for an absent direction
    /// letter) into the value, keeping the scale.
    pub(crate) fn with_sign(self, sign: i32) -> Self {
        Fixed {
            value: self.value * sign,
            scale: self.scale,
        }
    }
}

impl Scan for Fixed {
    /// Parses a sign-aware decimal field, keeping the number of fractional
    /// digits as the scale. Values that overflow `i32` fail the scan.
    fn scan(i: &str) -> IResult<&str, Self> {
        let (i, sign) = opt(one_of("+-")).parse(i)?;
        let (i, int_part) = digit0(i)?;
        let (i, frac_part) = opt(preceded(char('.'), digit0)).parse(i)?;

        let frac_part = frac_part.unwrap_or("");
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(nom::Err::Error(Error::Parsing(nom::error::Error::new(
                i,
                ErrorKind::Digit,
            ))));
        }

        let overflow = || nom::Err::Error(Error::Parsing(nom::error::Error::new(i, ErrorKind::TooLarge)));

        let mut value: i32 = 0;
        let mut scale: i32 = 1;
        for byte in int_part.bytes() {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(i32::from(byte - b'0')))
                .ok_or_else(overflow)?;
        }
        for byte in frac_part.bytes() {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(i32::from(byte - b'0')))
                .ok_or_else(overflow)?;
            scale = scale.checked_mul(10).ok_or_else(overflow)?;
        }

        if sign == Some('-') {
            value = -value;
        }

        Ok((i, Fixed { value, scale }))
    }
}
