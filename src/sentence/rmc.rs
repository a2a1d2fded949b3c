use nom::{Parser, combinator::opt};

use crate::{
    Fixed, IResult,
    datetime::{Date, Time},
    scan::{Scan, angular_field, fixed_field},
    sentence::{FaaMode, NavStatus, Sentence, SentenceId, Status},
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10 11
///         |         | |       | |        |  |   |   |    |  |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a*hh<CR><LF>
/// ```
///
/// NMEA 2.3 appends an FAA mode field, NMEA 4.1 a navigation status field;
/// both are accepted when present.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Rmc {
    /// Fix time in UTC
    pub time: Option<Time>,
    /// Position status, `Valid` for a usable fix
    pub status: Status,
    /// Latitude as `ddmm.mmmm`, negative south
    pub latitude: Fixed,
    /// Longitude as `dddmm.mmmm`, negative west
    pub longitude: Fixed,
    /// Speed over ground in knots
    pub speed: Fixed,
    /// Course over ground in degrees true
    pub course: Fixed,
    /// Fix date in UTC
    pub date: Option<Date>,
    /// Magnetic variation in degrees, negative west
    pub variation: Fixed,
    /// FAA mode indicator (NMEA 2.3 and later)
    pub faa_mode: Option<FaaMode>,
    /// Navigation status (NMEA 4.11)
    pub nav_status: Option<NavStatus>,
}

impl Sentence for Rmc {
    const ID: SentenceId = SentenceId::Rmc;

    fn content(i: &str) -> IResult<&str, Self> {
        let (i, time) = Option::<Time>::scan(i)?;
        let (i, status) = Status::scan_field(i)?;
        let (i, latitude) = angular_field(i)?;
        let (i, longitude) = angular_field(i)?;
        let (i, speed) = fixed_field(i)?;
        let (i, course) = fixed_field(i)?;
        let (i, date) = Option::<Date>::scan_field(i)?;
        let (i, variation) = angular_field(i)?;
        let (i, faa_mode) = opt(Option::<FaaMode>::scan_field).parse(i)?;
        let (i, nav_status) = opt(Option::<NavStatus>::scan_field).parse(i)?;

        Ok((
            i,
            Self {
                time,
                status,
                latitude,
                longitude,
                speed,
                course,
                date,
                variation,
                faa_mode: faa_mode.flatten(),
                nav_status: nav_status.flatten(),
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rmc_content() {
        let valid = [
            "081836,A,3751.65,S,14507.36,E,000.0,360.0,130998,011.3,E",
            "123519,A,4807.038,N,01131.000,E,0.20,0.83,230394,004.2,W,A",
            "092725.00,A,4717.113,N,00833.915,E,0.0,0.0,010190,,,A",
            "235959,V,0000.000,N,00000.000,W,10.5,180.0,311299,,,N,V",
            ",V,,,,,,,,,,N",
        ];
        for input in valid {
            let result = Rmc::content(input);
            assert!(result.is_ok(), "input: {input:?}\n\t{result:?}");
        }

        let invalid = [
            // non-numeric speed
            "123519,A,4807.038,N,01131.000,E,abc,0.83,230394,004.2,W",
            // status is not A/V
            "123519,X,4807.038,N,01131.000,E,0.20,0.83,230394,004.2,W",
            // missing variation field pair
            "123519,A,4807.038,N,01131.000,E,0.20,0.83,230394",
        ];
        for input in invalid {
            let result = Rmc::content(input);
            assert!(result.is_err(), "input: {input:?}\n\t{result:?}");
        }
    }

    #[test]
    fn test_rmc_empty_fields() {
        let (rest, rmc) = Rmc::content(",V,,,,,,,,,,N").unwrap();
        assert_eq!(rest, "");
        assert_eq!(rmc.time, None);
        assert_eq!(rmc.status, Status::Invalid);
        assert!(rmc.latitude.is_unknown());
        assert!(rmc.variation.is_unknown());
        assert_eq!(rmc.date, None);
        assert_eq!(rmc.faa_mode, Some(FaaMode::DataNotValid));
        assert_eq!(rmc.nav_status, None);
    }
}
