use nom::{
    Parser, character::complete::char, combinator::opt, number::complete::hex_u32,
    sequence::preceded,
};

use crate::{
    IResult,
    scan::Scan,
    sentence::{SatelliteInfo, Sentence, SentenceId},
};

/// GSV - Satellites in View
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...,x*hh<CR><LF>
/// ```
///
/// One GSV sentence carries at most four satellite-info tuples; a receiver
/// reports the full view as a numbered group of sentences. NMEA 4.11
/// appends a signal id field, accepted when present.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Gsv {
    /// Total number of GSV sentences in this group
    pub total_msgs: u8,
    /// Number of this sentence within the group, starting at 1
    pub msg_nr: u8,
    /// Total number of satellites in view
    pub total_sats: u8,
    /// Satellite information carried by this sentence
    pub satellites: heapless::Vec<SatelliteInfo, 4>,
    /// Signal id of the GNSS signal (NMEA 4.11)
    pub signal_id: Option<u8>,
}

impl Sentence for Gsv {
    const ID: SentenceId = SentenceId::Gsv;

    fn content(i: &str) -> IResult<&str, Self> {
        let (i, total_msgs) = u8::scan(i)?;
        let (i, msg_nr) = u8::scan_field(i)?;
        let (i, total_sats) = u8::scan_field(i)?;
        let (i, satellites) = heapless::Vec::<SatelliteInfo, 4>::scan_field(i)?;
        let (i, signal_id) = opt(preceded(char(','), opt(hex_u32))).parse(i)?;

        Ok((
            i,
            Self {
                total_msgs,
                msg_nr,
                total_sats,
                satellites,
                signal_id: signal_id.flatten().map(|id| id as u8),
            },
        ))
    }
}
