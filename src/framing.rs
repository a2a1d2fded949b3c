//! # Sentence Framing
//!
//! Structural and checksum validation for the standard NMEA 0183 frame:
//! `$<body>*CC` with an optional trailing CRLF.
//!
//! [`check`] is the gate every decoder goes through: it verifies the frame
//! and hands back the body (everything between `$` and `*`) for content
//! parsing. The checksum itself is the running XOR of the body bytes,
//! exposed as [`checksum`].

use nom::error::ErrorKind;

use crate::Error;

/// Maximum length of a sentence in bytes, including the leading `$` and any
/// trailing checksum and CRLF.
pub const MAX_LENGTH: usize = 80;

/// Defines how [`check`] treats a missing `*CC` checksum suffix.
///
/// The checksum, when present, is always validated; the mode only decides
/// whether its absence is an error.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumMode {
    #[default]
    /// Checksum is required and must be present.
    ///
    /// Use this mode for strict NMEA 0183 compliance or when data integrity
    /// is critical. All sentence decoders validate in this mode.
    Required,

    /// Checksum is optional but will be validated if present.
    ///
    /// Use this mode when classifying traffic from legacy equipment that
    /// does not always append checksums.
    Optional,
}

/// Calculates the NMEA 0183 checksum for the given sentence body.
///
/// The checksum is the XOR of all bytes between the `$` prefix and the `*`
/// delimiter, excluding both delimiters, and is transmitted as two uppercase
/// hexadecimal digits.
///
/// ```rust
/// assert_eq!(nmea0183_decoder::checksum("GPGGA,data"), 0x6A);
/// ```
pub fn checksum(body: &str) -> u8 {
    body.bytes().fold(0u8, |acc, byte| acc ^ byte)
}

/// Validates sentence framing and checksum, returning the sentence body.
///
/// The input must be a single complete sentence: ASCII, at most
/// [`MAX_LENGTH`] bytes, starting with `$`, optionally ending with `\r\n`,
/// and carrying a `*CC` suffix (two uppercase hex digits) as its last three
/// characters once the line ending is stripped. Any deviation fails; there
/// is no partial success.
///
/// ```rust
/// use nmea0183_decoder::{ChecksumMode, Error, check};
///
/// assert_eq!(check("$GPGGA,data*6A", ChecksumMode::Required), Ok("GPGGA,data"));
/// assert_eq!(check("$GPGGA,data\r\n", ChecksumMode::Optional), Ok("GPGGA,data"));
/// assert_eq!(
///     check("$GPGGA,data*6B", ChecksumMode::Required),
///     Err(Error::ChecksumMismatch { expected: 0x6A, found: 0x6B }),
/// );
/// ```
pub fn check(sentence: &str, mode: ChecksumMode) -> Result<&str, Error<&str>> {
    if !sentence.is_ascii() {
        return Err(Error::NonAscii);
    }
    if sentence.len() > MAX_LENGTH {
        return Err(Error::TooLong {
            length: sentence.len(),
        });
    }

    let line = sentence.strip_suffix("\r\n").unwrap_or(sentence);
    let Some(line) = line.strip_prefix('$') else {
        return Err(Error::Parsing(nom::error::Error::new(
            sentence,
            ErrorKind::Char,
        )));
    };

    match line.split_once('*') {
        Some((body, declared)) => {
            let found = match declared.as_bytes() {
                [hi, lo] => match (hex_digit(*hi), hex_digit(*lo)) {
                    (Some(hi), Some(lo)) => (hi << 4) | lo,
                    _ => {
                        return Err(Error::Parsing(nom::error::Error::new(
                            declared,
                            ErrorKind::HexDigit,
                        )));
                    }
                },
                _ => {
                    return Err(Error::Parsing(nom::error::Error::new(
                        declared,
                        ErrorKind::Count,
                    )));
                }
            };

            let expected = checksum(body);
            if expected != found {
                return Err(Error::ChecksumMismatch { expected, found });
            }

            Ok(body)
        }
        None => match mode {
            ChecksumMode::Required => Err(Error::Parsing(nom::error::Error::new(
                line,
                ErrorKind::Char,
            ))),
            ChecksumMode::Optional => Ok(line),
        },
    }
}

// Uppercase only; receivers transmit lowercase checksums in violation of the
// standard and those are rejected here.
fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "$GPRMC,081836,A,3751.65,S,14507.36,E,000.0,360.0,130998,011.3,E*62";

    #[test]
    fn test_check_valid() {
        let body = check(VALID, ChecksumMode::Required).unwrap();
        assert_eq!(
            body,
            "GPRMC,081836,A,3751.65,S,14507.36,E,000.0,360.0,130998,011.3,E"
        );
    }

    #[test]
    fn test_check_crlf_stripped() {
        let crlf = format!("{VALID}\r\n");
        assert!(check(&crlf, ChecksumMode::Required).is_ok());
    }

    #[test]
    fn test_check_declared_mismatch() {
        let tampered = VALID.replace("*62", "*63");
        assert_eq!(
            check(&tampered, ChecksumMode::Required),
            Err(Error::ChecksumMismatch {
                expected: 0x62,
                found: 0x63,
            }),
        );
    }

    #[test]
    fn test_check_flipped_body_byte() {
        // XOR of the body changes with any single byte flip
        let flipped = VALID.replace(",A,", ",B,");
        assert!(matches!(
            check(&flipped, ChecksumMode::Required),
            Err(Error::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_check_missing_dollar() {
        let res = check(&VALID[1..], ChecksumMode::Required);
        assert!(matches!(res, Err(Error::Parsing(_))));
    }

    #[test]
    fn test_check_lowercase_hex_rejected() {
        assert!(check("$GPGGA,data*6a", ChecksumMode::Required).is_err());
    }

    #[test]
    fn test_check_short_and_long_checksum() {
        assert!(check("$GPGGA,data*6", ChecksumMode::Required).is_err());
        assert!(check("$GPGGA,data*6AB", ChecksumMode::Required).is_err());
    }

    #[test]
    fn test_check_optional_mode() {
        let bare = "$GPRMC,081836,A,3751.65,S,14507.36,E,000.0,360.0,130998,011.3,E";
        assert!(check(bare, ChecksumMode::Required).is_err());
        assert!(check(bare, ChecksumMode::Optional).is_ok());
        // a present-but-wrong checksum still fails in optional mode
        assert!(check("$GPGGA,data*00", ChecksumMode::Optional).is_err());
    }

    #[test]
    fn test_check_overlong() {
        let long = format!("$GPTXT,{}*00", "A".repeat(MAX_LENGTH));
        assert_eq!(
            check(&long, ChecksumMode::Required),
            Err(Error::TooLong { length: long.len() }),
        );
    }

    #[test]
    fn test_check_non_ascii() {
        assert_eq!(
            check("$GPGGA,dätä*6A", ChecksumMode::Required),
            Err(Error::NonAscii),
        );
    }
}
