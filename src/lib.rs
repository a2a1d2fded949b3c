//! # NMEA 0183 Decoder
//!
//! This library decodes NMEA 0183 sentences from GPS/GNSS receivers into
//! typed, numerically exact records. It owns no I/O: the caller reads the
//! byte stream (serial port, file, socket), splits it on line terminators,
//! and hands over one complete sentence at a time.
//!
//! Fractional fields are kept as [`Fixed`] values (an integer plus a
//! power-of-ten scale), so nothing is rounded through floating point during
//! decoding. Conversion to `f32` (and to decimal degrees for coordinates)
//! is explicit and happens only when the caller asks for it.
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_decoder::{Rmc, Sentence, Status};
//!
//! let rmc = Rmc::decode("$GPRMC,081836,A,3751.65,S,14507.36,E,000.0,360.0,130998,011.3,E*62")?;
//!
//! assert_eq!(rmc.status, Status::Valid);
//! assert_eq!(rmc.latitude.value, -375165);
//! assert_eq!(rmc.latitude.scale, 100);
//! assert!((rmc.latitude.to_coordinate() + 37.8608).abs() < 1e-3);
//! # Ok::<(), nmea0183_decoder::Error<&str>>(())
//! ```
//!
//! When the sentence kind is not known in advance, [`NmeaSentence::decode`]
//! classifies and dispatches in one step; [`sentence_id`] classifies without
//! decoding.

pub mod error;

mod datetime;
mod fixed;
mod framing;
mod scan;
mod sentence;

pub use datetime::{Date, Time};
pub use error::{Error, IResult};
pub use fixed::Fixed;
pub use framing::{ChecksumMode, MAX_LENGTH, check, checksum};
pub use scan::{Scan, angular_field, direction_field, fixed_field};
pub use sentence::{
    FaaMode, FixMode, Gga, Gsa, Gst, Gsv, NavStatus, NmeaSentence, Quality, Rmc, SatelliteInfo,
    SelectionMode, Sentence, SentenceId, Status, sentence_id, talker_id,
};

#[cfg(test)]
mod tests {
    mod decode;
}
