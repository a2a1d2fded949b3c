use crate::{
    Fixed, IResult,
    datetime::Time,
    scan::{Scan, angular_field, fixed_field},
    sentence::{Quality, Sentence, SentenceId},
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Gga {
    /// Fix time in UTC
    pub time: Option<Time>,
    /// Latitude as `ddmm.mmmm`, negative south
    pub latitude: Fixed,
    /// Longitude as `dddmm.mmmm`, negative west
    pub longitude: Fixed,
    /// GPS quality indicator
    pub fix_quality: Quality,
    /// Number of satellites in use
    pub satellites_tracked: Option<u8>,
    /// Horizontal dilution of precision
    pub hdop: Fixed,
    /// Antenna altitude above mean sea level
    pub altitude: Fixed,
    /// Unit of the altitude field, normally `M` for meters
    pub altitude_units: Option<char>,
    /// Geoidal separation: the difference between the WGS-84 ellipsoid and
    /// mean sea level, negative when the geoid is below the ellipsoid
    pub height: Fixed,
    /// Unit of the geoidal separation field, normally `M` for meters
    pub height_units: Option<char>,
    /// Age of the differential correction in seconds, unknown when DGPS is
    /// not in use
    pub dgps_age: Fixed,
    /// Differential reference station id
    pub ref_station_id: Option<u16>,
}

impl Sentence for Gga {
    const ID: SentenceId = SentenceId::Gga;

    fn content(i: &str) -> IResult<&str, Self> {
        let (i, time) = Option::<Time>::scan(i)?;
        let (i, latitude) = angular_field(i)?;
        let (i, longitude) = angular_field(i)?;
        let (i, fix_quality) = Quality::scan_field(i)?;
        let (i, satellites_tracked) = Option::<u8>::scan_field(i)?;
        let (i, hdop) = fixed_field(i)?;
        let (i, altitude) = fixed_field(i)?;
        let (i, altitude_units) = Option::<char>::scan_field(i)?;
        let (i, height) = fixed_field(i)?;
        let (i, height_units) = Option::<char>::scan_field(i)?;
        let (i, dgps_age) = fixed_field(i)?;
        let (i, ref_station_id) = Option::<u16>::scan_field(i)?;

        Ok((
            i,
            Self {
                time,
                latitude,
                longitude,
                fix_quality,
                satellites_tracked,
                hdop,
                altitude,
                altitude_units,
                height,
                height_units,
                dgps_age,
                ref_station_id,
            },
        ))
    }
}
