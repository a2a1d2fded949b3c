//! # Error Types
//!
//! This module defines the error types used throughout the decoding library.

use nom::error::{ErrorKind, FromExternalError, ParseError};

use crate::sentence::SentenceId;

/// Holds the result of parsing functions.
///
/// The `Ok` side is a pair containing the remainder of the input (the part of
/// the data that was not parsed) and the produced value. The `Err` side
/// contains an instance of `nom::Err`.
///
/// Outside of the parsing code, use [`nom::Finish::finish`] to convert it to
/// a common result type.
pub type IResult<I, O> = nom::IResult<I, O, Error<I>>;

/// Represents all possible errors that can occur while decoding a sentence.
///
/// Every failure is local and recoverable: decoding is deterministic, so the
/// only meaningful recovery is acquiring a fresh sentence from the stream.
#[derive(Debug, PartialEq)]
pub enum Error<I> {
    /// The provided input contains non-ASCII characters.
    ///
    /// NMEA sentences must be ASCII-only for proper parsing and checksum
    /// calculation.
    NonAscii,

    /// The sentence exceeds [`MAX_LENGTH`](crate::MAX_LENGTH) bytes.
    ///
    /// Overlong input is rejected before any field is examined, regardless of
    /// whether its content would otherwise be well-formed.
    TooLong {
        /// Length of the rejected input in bytes
        length: usize,
    },

    /// The checksum of the sentence was corrupt or incorrect.
    ///
    /// Contains both the expected checksum (calculated from the sentence
    /// body) and the checksum actually found in the sentence.
    ChecksumMismatch {
        /// The checksum calculated from the sentence body
        expected: u8,
        /// The checksum declared in the sentence
        found: u8,
    },

    /// The sentence is well-formed but its type is not in the supported set.
    ///
    /// Contains the sentence body for reference.
    UnknownSentence(I),

    /// A specific decoder was invoked on a sentence of a different kind.
    SentenceMismatch {
        /// The kind the decoder expected
        expected: SentenceId,
        /// The kind actually classified from the sentence
        found: SentenceId,
    },

    /// A field could not be parsed as its requested type, or the sentence had
    /// too few or too many fields for its layout.
    Parsing(nom::error::Error<I>),
}

impl<I> ParseError<I> for Error<I> {
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        Error::Parsing(nom::error::Error::new(input, kind))
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<I, E> FromExternalError<I, E> for Error<I> {
    fn from_external_error(input: I, kind: ErrorKind, _e: E) -> Self {
        Error::Parsing(nom::error::Error::new(input, kind))
    }
}
