//! # Sentence Classification and Decoding
//!
//! A framed sentence body starts with a header: a 2-letter talker id (`GP`,
//! `GN`, …) followed by the 3-letter sentence type. [`sentence_id`]
//! classifies the type into the closed [`SentenceId`] set, and each record
//! type implements [`Sentence`], whose provided [`Sentence::decode`] runs
//! the whole pipeline: framing check, classification, kind match, field
//! scan, full-consumption check.

mod gga;
mod gsa;
mod gst;
mod gsv;
mod rmc;

pub use gga::Gga;
pub use gsa::Gsa;
pub use gst::Gst;
pub use gsv::Gsv;
pub use rmc::Rmc;

use nom::{
    Finish, Parser,
    bytes::complete::{take_while1, take_while_m_n},
    character::complete::char,
    error::ErrorKind,
    sequence::preceded,
};

use crate::{ChecksumMode, Error, IResult, Scan, framing};

/// The supported sentence kinds.
///
/// Syntactically valid sentences of any other type classify as `Unknown`
/// rather than failing; structurally broken input is an error, never a tag.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceId {
    /// Well-formed but unsupported sentence type
    Unknown,
    /// Recommended Minimum Navigation Information
    Rmc,
    /// Global Positioning System Fix Data
    Gga,
    /// GPS DOP and active satellites
    Gsa,
    /// GPS Pseudorange Noise Statistics
    Gst,
    /// Satellites in View
    Gsv,
}

/// Extracts the 2-letter talker id (e.g. `GP`, `GN`).
///
/// Framing validity is the caller's responsibility; this only requires the
/// two uppercase letters after the optional `$`. Talkers are assumed to be
/// exactly two letters; proprietary and some multi-constellation talker
/// families use other lengths and will misclassify here.
pub fn talker_id(sentence: &str) -> Result<&str, Error<&str>> {
    let body = sentence.strip_prefix('$').unwrap_or(sentence);
    let (_, talker) = talker(body).finish()?;
    Ok(talker)
}

/// Classifies a sentence, validating its framing first.
///
/// The framing check runs in the given [`ChecksumMode`]; structural or
/// checksum failure is returned as the error. On a valid frame the talker id
/// is skipped and the remaining uppercase letters before the first comma are
/// matched case-sensitively against the supported set, with anything else
/// classifying as [`SentenceId::Unknown`].
pub fn sentence_id(sentence: &str, mode: ChecksumMode) -> Result<SentenceId, Error<&str>> {
    let body = framing::check(sentence, mode)?;
    let (_, id) = header(body).finish()?;
    Ok(id)
}

fn talker(i: &str) -> IResult<&str, &str> {
    take_while_m_n(2, 2, |c: char| c.is_ascii_uppercase()).parse(i)
}

fn header(i: &str) -> IResult<&str, SentenceId> {
    let (i, _talker) = talker(i)?;
    let (i, kind) = take_while1(|c: char| c.is_ascii_uppercase()).parse(i)?;

    let id = match kind {
        "RMC" => SentenceId::Rmc,
        "GGA" => SentenceId::Gga,
        "GSA" => SentenceId::Gsa,
        "GST" => SentenceId::Gst,
        "GSV" => SentenceId::Gsv,
        _ => SentenceId::Unknown,
    };

    Ok((i, id))
}

/// A decodable sentence record.
///
/// Implementors provide their [`SentenceId`] and a parser for the fields
/// after the `<talker><type>,` header; [`Sentence::decode`] composes the
/// full pipeline around it.
pub trait Sentence: Sized {
    /// The kind this record decodes.
    const ID: SentenceId;

    /// Parses the comma-separated fields following the sentence header.
    fn content(i: &str) -> IResult<&str, Self>;

    /// Decodes one complete sentence into this record.
    ///
    /// Fails on framing/checksum errors, on a sentence of a different kind
    /// ([`Error::SentenceMismatch`]), and on any field-scan failure. On
    /// error no record is produced.
    fn decode(sentence: &str) -> Result<Self, Error<&str>> {
        let body = framing::check(sentence, ChecksumMode::Required)?;
        let (fields, id) = header(body).finish()?;
        if id != Self::ID {
            return Err(Error::SentenceMismatch {
                expected: Self::ID,
                found: id,
            });
        }

        let (rest, record) = preceded(char(','), Self::content).parse(fields).finish()?;
        if !rest.is_empty() {
            return Err(Error::Parsing(nom::error::Error::new(rest, ErrorKind::Eof)));
        }

        Ok(record)
    }
}

/// A unified record over all supported sentence types.
///
/// Use this when the caller does not know the kind in advance; the matching
/// decoder is dispatched from the classified header.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum NmeaSentence {
    /// Recommended Minimum Navigation Information
    Rmc(Rmc),
    /// Global Positioning System Fix Data
    Gga(Gga),
    /// GPS DOP and active satellites
    Gsa(Gsa),
    /// GPS Pseudorange Noise Statistics
    Gst(Gst),
    /// Satellites in View
    Gsv(Gsv),
}

impl NmeaSentence {
    /// Decodes whichever supported sentence the input is.
    ///
    /// Well-formed sentences of unsupported types fail with
    /// [`Error::UnknownSentence`].
    pub fn decode(sentence: &str, mode: ChecksumMode) -> Result<Self, Error<&str>> {
        let body = framing::check(sentence, mode)?;
        let (fields, id) = header(body).finish()?;

        let (rest, record) = match id {
            SentenceId::Rmc => preceded(char(','), Rmc::content).map(Self::Rmc).parse(fields),
            SentenceId::Gga => preceded(char(','), Gga::content).map(Self::Gga).parse(fields),
            SentenceId::Gsa => preceded(char(','), Gsa::content).map(Self::Gsa).parse(fields),
            SentenceId::Gst => preceded(char(','), Gst::content).map(Self::Gst).parse(fields),
            SentenceId::Gsv => preceded(char(','), Gsv::content).map(Self::Gsv).parse(fields),
            SentenceId::Unknown => return Err(Error::UnknownSentence(body)),
        }
        .finish()?;

        if !rest.is_empty() {
            return Err(Error::Parsing(nom::error::Error::new(rest, ErrorKind::Eof)));
        }

        Ok(record)
    }

    /// The kind of the decoded record.
    pub fn id(&self) -> SentenceId {
        match self {
            NmeaSentence::Rmc(_) => SentenceId::Rmc,
            NmeaSentence::Gga(_) => SentenceId::Gga,
            NmeaSentence::Gsa(_) => SentenceId::Gsa,
            NmeaSentence::Gst(_) => SentenceId::Gst,
            NmeaSentence::Gsv(_) => SentenceId::Gsv,
        }
    }
}

macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $char:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl crate::Scan for $name {
            fn scan(i: &str) -> crate::IResult<&str, Self> {
                use nom::Parser;
                nom::branch::alt(($(
                    nom::combinator::value(Self::$variant, nom::character::complete::char($char)),
                )*)).parse(i)
            }
        }
    };
}

field_enum! {
    /// Position status indicator
    pub enum Status {
        /// A - Valid
        'A' => Valid,
        /// V - Invalid (receiver warning)
        'V' => Invalid,
    }
}

field_enum! {
    /// Quality of the GPS fix
    pub enum Quality {
        /// 0 - Fix not available
        '0' => NoFix,
        /// 1 - GPS fix
        '1' => GpsFix,
        /// 2 - Differential GPS fix
        '2' => DgpsFix,
        /// 3 - PPS fix
        '3' => PpsFix,
        /// 4 - Real Time Kinematic
        '4' => Rtk,
        /// 5 - Float RTK
        '5' => FloatRtk,
        /// 6 - Estimated (dead reckoning)
        '6' => Estimated,
        /// 7 - Manual input mode
        '7' => Manual,
        /// 8 - Simulation mode
        '8' => Simulation,
    }
}

field_enum! {
    /// GSA selection mode
    pub enum SelectionMode {
        /// A - Automatic, 2D/3D
        'A' => Automatic,
        /// M - Manual, forced to operate in 2D or 3D
        'M' => Manual,
    }
}

field_enum! {
    /// GSA fix mode
    pub enum FixMode {
        /// 1 - No fix
        '1' => NoFix,
        /// 2 - 2D fix
        '2' => Fix2D,
        /// 3 - 3D fix
        '3' => Fix3D,
    }
}

field_enum! {
    /// FAA mode indicator (NMEA 2.3 and later)
    pub enum FaaMode {
        /// A - Autonomous mode
        'A' => Autonomous,
        /// C - Quectel querk, "Caution"
        'C' => Caution,
        /// D - Differential mode
        'D' => Differential,
        /// E - Estimated (dead-reckoning) mode
        'E' => Estimated,
        /// F - RTK float mode
        'F' => FloatRtk,
        /// M - Manual input mode
        'M' => Manual,
        /// N - Data not valid
        'N' => DataNotValid,
        /// P - Precise
        'P' => Precise,
        /// R - RTK integer mode
        'R' => FixedRtk,
        /// S - Simulated mode
        'S' => Simulator,
        /// U - Quectel querk, "Unsafe"
        'U' => Unsafe,
    }
}

field_enum! {
    /// Navigation status (NMEA 4.11)
    pub enum NavStatus {
        /// A - Autonomous mode
        'A' => Autonomous,
        /// D - Differential mode
        'D' => Differential,
        /// E - Estimated (dead-reckoning) mode
        'E' => Estimated,
        /// M - Manual input mode
        'M' => Manual,
        /// N - Not valid
        'N' => NotValid,
        /// S - Simulated mode
        'S' => Simulator,
        /// V - Valid
        'V' => Valid,
    }
}

/// Satellite information used in [`Gsv`] sentences
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SatelliteInfo {
    /// Satellite PRN number
    pub prn: u8,
    /// Elevation in degrees (0-90)
    pub elevation: Option<u8>,
    /// Azimuth in degrees true (0-359)
    pub azimuth: Option<u16>,
    /// Signal-to-noise ratio in dB (0-99)
    pub snr: Option<u8>,
}

impl Scan for SatelliteInfo {
    fn scan(i: &str) -> IResult<&str, Self> {
        let (i, prn) = u8::scan(i)?;
        let (i, elevation) = Option::<u8>::scan_field(i)?;
        let (i, azimuth) = Option::<u16>::scan_field(i)?;
        let (i, snr) = Option::<u8>::scan_field(i)?;

        Ok((
            i,
            Self {
                prn,
                elevation,
                azimuth,
                snr,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status() {
        assert_eq!(Status::scan("A").unwrap(), ("", Status::Valid));
        assert_eq!(Status::scan("V").unwrap(), ("", Status::Invalid));
        assert!(Status::scan("K").is_err());
    }

    #[test]
    fn test_fix_mode() {
        assert_eq!(FixMode::scan("1").unwrap(), ("", FixMode::NoFix));
        assert_eq!(FixMode::scan("2").unwrap(), ("", FixMode::Fix2D));
        assert_eq!(FixMode::scan("3").unwrap(), ("", FixMode::Fix3D));
        assert!(FixMode::scan("4").is_err());
    }

    #[test]
    fn test_quality() {
        assert_eq!(Quality::scan("0").unwrap(), ("", Quality::NoFix));
        assert_eq!(Quality::scan("8").unwrap(), ("", Quality::Simulation));
        assert!(Quality::scan("9").is_err());
    }

    #[test]
    fn test_talker_id() {
        assert_eq!(talker_id("$GPRMC,081836,A*xx"), Ok("GP"));
        assert_eq!(talker_id("GNGSA,A,3"), Ok("GN"));
        assert!(talker_id("$g").is_err());
    }

    #[test]
    fn test_satellite_info() {
        let (rest, sat) = SatelliteInfo::scan("03,03,111,00").unwrap();
        assert_eq!(rest, "");
        assert_eq!(
            sat,
            SatelliteInfo {
                prn: 3,
                elevation: Some(3),
                azimuth: Some(111),
                snr: Some(0),
            },
        );

        let (_, sat) = SatelliteInfo::scan("11,,,").unwrap();
        assert_eq!(sat.prn, 11);
        assert_eq!(sat.elevation, None);
        assert_eq!(sat.azimuth, None);
        assert_eq!(sat.snr, None);
    }
}
