//! # Field Scanning
//!
//! The shared engine behind every sentence decoder. A sentence body is a
//! sequence of comma-separated fields; each field shape is a type
//! implementing [`Scan`], and a decoder is nothing but a fixed sequence of
//! `Scan` calls in lock-step with its sentence layout.
//!
//! Scanning is strict: a missing field or a field that cannot be parsed as
//! its requested type fails the whole scan, and the decoders additionally
//! require the body to be fully consumed. Nothing in this module allocates;
//! string data stays borrowed from the (at most 80-byte) input.

use nom::{
    Parser,
    bytes::complete::take_while_m_n,
    character::complete::{anychar, char, one_of},
    combinator::{map_res, opt},
    sequence::preceded,
};

use crate::{Fixed, IResult};

/// Trait for types that can be parsed from a sentence field.
///
/// [`Scan::scan`] parses a value at the start of the input; [`Scan::scan_field`]
/// first consumes the `,` separator. Implementations exist for the integer
/// widths the sentence set needs, `char`, [`Fixed`](crate::Fixed),
/// [`Date`](crate::Date), [`Time`](crate::Time), `Option<T>` (empty-field
/// handling), and `heapless::Vec<T, N>` (bounded lists).
///
/// ```rust
/// use nmea0183_decoder::{IResult, Scan};
///
/// let result: IResult<_, _> = u8::scan("42");
/// assert_eq!(result, Ok(("", 42)));
///
/// let result: IResult<_, _> = Option::<u8>::scan_field(",,");
/// assert_eq!(result, Ok((",", None)));
/// ```
pub trait Scan: Sized {
    /// Parses a value from the start of the input.
    fn scan(i: &str) -> IResult<&str, Self>;

    /// Parses a comma-preceded value.
    fn scan_field(i: &str) -> IResult<&str, Self> {
        preceded(char(','), Self::scan).parse(i)
    }
}

macro_rules! scan_uint {
    ($($t:tt),*) => {$(
        impl Scan for $t {
            fn scan(i: &str) -> IResult<&str, Self> {
                nom::character::complete::$t.parse(i)
            }
        }
    )*};
}

scan_uint!(u8, u16, u32);

impl Scan for char {
    fn scan(i: &str) -> IResult<&str, Self> {
        anychar.parse(i)
    }
}

impl<T: Scan> Scan for Option<T> {
    fn scan(i: &str) -> IResult<&str, Self> {
        opt(T::scan).parse(i)
    }

    /// An empty field (`,,` or a trailing `,`) is `None`; a non-empty field
    /// that fails to parse as `T` fails the scan.
    fn scan_field(i: &str) -> IResult<&str, Self> {
        let (i, _) = char(',').parse(i)?;
        match T::scan(i) {
            Ok((i, value)) => Ok((i, Some(value))),
            Err(nom::Err::Error(_)) if i.is_empty() || i.starts_with(',') => Ok((i, None)),
            Err(e) => Err(e),
        }
    }
}

impl<T: Scan, const N: usize> Scan for heapless::Vec<T, N> {
    /// Collects up to `N` comma-separated elements, stopping at the first
    /// element that does not parse. Nothing is consumed from a failed
    /// attempt.
    fn scan(i: &str) -> IResult<&str, Self> {
        let mut elems = heapless::Vec::new();
        if N == 0 {
            return Ok((i, elems));
        }

        let mut i = i;
        match T::scan(i) {
            Ok((next, first)) => {
                let _ = elems.push(first);
                i = next;
            }
            Err(nom::Err::Error(_)) => return Ok((i, elems)),
            Err(e) => return Err(e),
        }

        while elems.len() < N {
            match T::scan_field(i) {
                Ok((next, elem)) => {
                    let _ = elems.push(elem);
                    i = next;
                }
                Err(nom::Err::Error(_)) => break,
                Err(e) => return Err(e),
            }
        }

        Ok((i, elems))
    }

    /// Collects up to `N` elements, each preceded by a comma.
    fn scan_field(i: &str) -> IResult<&str, Self> {
        let mut elems = heapless::Vec::new();
        let mut i = i;

        while elems.len() < N {
            match T::scan_field(i) {
                Ok((next, elem)) => {
                    let _ = elems.push(elem);
                    i = next;
                }
                Err(nom::Err::Error(_)) => break,
                Err(e) => return Err(e),
            }
        }

        Ok((i, elems))
    }
}

/// Parses a comma-preceded fractional field, yielding [`Fixed::UNKNOWN`]
/// when the field is empty.
pub fn fixed_field(i: &str) -> IResult<&str, Fixed> {
    let (i, value) = Option::<Fixed>::scan_field(i)?;
    Ok((i, value.unwrap_or(Fixed::UNKNOWN)))
}

/// Parses a comma-preceded direction-letter field: `N`/`E` yield `+1`,
/// `S`/`W` yield `-1`, an empty field yields `0`.
pub fn direction_field(i: &str) -> IResult<&str, i32> {
    let (i, _) = char(',').parse(i)?;
    let (i, letter) = opt(one_of("NSEW")).parse(i)?;
    let sign = match letter {
        Some('N') | Some('E') => 1,
        Some('S') | Some('W') => -1,
        _ => 0,
    };
    Ok((i, sign))
}

/// Parses an angular quantity: a fixed-point field followed by its direction
/// field (latitude, longitude, magnetic variation). The direction sign is
/// folded into the value.
pub fn angular_field(i: &str) -> IResult<&str, Fixed> {
    let (i, value) = fixed_field(i)?;
    let (i, sign) = direction_field(i)?;
    Ok((i, value.with_sign(sign)))
}

/// Exactly two decimal digits, as used by the hhmmss and ddmmyy stamps.
pub(crate) fn two_digits(i: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_digit()),
        |s: &str| s.parse::<u8>(),
    )
    .parse(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_field() {
        let result: IResult<_, _> = Option::<u8>::scan_field(",42,");
        assert_eq!(result, Ok((",", Some(42))));

        let result: IResult<_, _> = Option::<u8>::scan_field(",");
        assert_eq!(result, Ok(("", None)));

        let result: IResult<_, _> = Option::<u8>::scan_field(",x,");
        assert!(result.is_err());
    }

    #[test]
    fn test_bounded_vec() {
        let result: IResult<_, heapless::Vec<u8, 4>> = heapless::Vec::scan("1,2,3");
        let (rest, elems) = result.unwrap();
        assert_eq!(rest, "");
        assert_eq!(elems.as_slice(), &[1, 2, 3]);

        // capacity bound: the fifth element is left unconsumed
        let result: IResult<_, heapless::Vec<u8, 4>> = heapless::Vec::scan("1,2,3,4,5");
        let (rest, elems) = result.unwrap();
        assert_eq!(rest, ",5");
        assert_eq!(elems.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_fixed_field_empty_is_unknown() {
        let (_, value) = fixed_field(",,").unwrap();
        assert!(value.is_unknown());
        assert_eq!(value.scale, 0);
    }

    #[test]
    fn test_direction_field() {
        assert_eq!(direction_field(",N").unwrap().1, 1);
        assert_eq!(direction_field(",W").unwrap().1, -1);
        assert_eq!(direction_field(",").unwrap().1, 0);
    }

    #[test]
    fn test_angular_field() {
        let (_, lat) = angular_field(",3751.65,S").unwrap();
        assert_eq!(lat, Fixed::new(-375165, 100));

        let (_, unknown) = angular_field(",,,").unwrap();
        assert!(unknown.is_unknown());
    }
}
