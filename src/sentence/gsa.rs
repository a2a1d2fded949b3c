use nom::{Parser, combinator::opt, multi::fill};

use crate::{
    Fixed, IResult,
    scan::{Scan, fixed_field},
    sentence::{FixMode, SelectionMode, Sentence, SentenceId},
};

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                      15 16  17
///         | | |                       | |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,*hh<CR><LF>
/// ```
///
/// NMEA 4.11 appends a system id field, accepted when present.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Gsa {
    /// Selection mode
    pub mode: SelectionMode,
    /// Fix mode
    pub fix_type: FixMode,
    /// PRN numbers of the satellites used in the fix; the sentence always
    /// carries 12 slots, empty ones are skipped
    pub sats: heapless::Vec<u8, 12>,
    /// Position dilution of precision
    pub pdop: Fixed,
    /// Horizontal dilution of precision
    pub hdop: Fixed,
    /// Vertical dilution of precision
    pub vdop: Fixed,
    /// System id of the GNSS used for the fix (NMEA 4.11)
    pub system_id: Option<u8>,
}

impl Sentence for Gsa {
    const ID: SentenceId = SentenceId::Gsa;

    fn content(i: &str) -> IResult<&str, Self> {
        let (i, mode) = SelectionMode::scan(i)?;
        let (i, fix_type) = FixMode::scan_field(i)?;

        let mut slots = [None::<u8>; 12];
        let (i, _) = fill(Option::<u8>::scan_field, &mut slots).parse(i)?;

        let (i, pdop) = fixed_field(i)?;
        let (i, hdop) = fixed_field(i)?;
        let (i, vdop) = fixed_field(i)?;
        let (i, system_id) = opt(Option::<u8>::scan_field).parse(i)?;

        Ok((
            i,
            Self {
                mode,
                fix_type,
                sats: slots.into_iter().flatten().collect(),
                pdop,
                hdop,
                vdop,
                system_id: system_id.flatten(),
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gsa_content() {
        let valid = [
            "A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1",
            "M,1,,,,,,,,,,,,,99.9,99.9,99.9",
            "A,3,01,02,03,04,05,06,07,08,09,10,11,12,1.5,1.0,2.0",
            "A,2,10,20,30,,,,,,,,,,2.0,1.5,2.5,1",
        ];
        for input in valid {
            let result = Gsa::content(input);
            assert!(result.is_ok(), "input: {input:?}\n\t{result:?}");
        }

        let invalid = [
            // fix mode out of range
            "A,4,01,02,03,04,05,06,07,08,09,10,11,12,1.5,1.0,2.0",
            // missing VDOP
            "A,3,01,02,03,04,05,06,07,08,09,10,11,12,1.5,1.0",
            // non-numeric PDOP
            "A,3,01,02,03,04,05,06,07,08,09,10,11,12,A,1.0,2.0",
        ];
        for input in invalid {
            let result = Gsa::content(input);
            assert!(result.is_err(), "input: {input:?}\n\t{result:?}");
        }
    }

    #[test]
    fn test_gsa_sparse_prn_slots() {
        let (rest, gsa) = Gsa::content("A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1").unwrap();
        assert_eq!(rest, "");
        assert_eq!(gsa.mode, SelectionMode::Automatic);
        assert_eq!(gsa.fix_type, FixMode::Fix3D);
        assert_eq!(gsa.sats.as_slice(), &[4, 5, 9, 12, 24]);
        assert_eq!(gsa.pdop, Fixed::new(25, 10));
        assert_eq!(gsa.hdop, Fixed::new(13, 10));
        assert_eq!(gsa.vdop, Fixed::new(21, 10));
        assert_eq!(gsa.system_id, None);
    }
}
