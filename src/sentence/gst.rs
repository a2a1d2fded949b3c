use crate::{
    Fixed, IResult,
    datetime::Time,
    scan::{Scan, fixed_field},
    sentence::{Sentence, SentenceId},
};

/// GST - GPS Pseudorange Noise Statistics
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gst_gps_pseudorange_noise_statistics>
///
/// ```text
///         1         2   3   4   5   6   7   8
///         |         |   |   |   |   |   |   |
///  $--GST,hhmmss.ss,x.x,x.x,x.x,x.x,x.x,x.x,x.x*hh<CR><LF>
/// ```
///
/// All deviations are one-sigma estimates in meters except the error-ellipse
/// orientation, which is in degrees from true north.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Gst {
    /// Fix time in UTC
    pub time: Option<Time>,
    /// RMS of the pseudorange residuals
    pub rms_deviation: Fixed,
    /// Standard deviation of the error-ellipse semi-major axis
    pub semi_major_deviation: Fixed,
    /// Standard deviation of the error-ellipse semi-minor axis
    pub semi_minor_deviation: Fixed,
    /// Orientation of the error-ellipse semi-major axis
    pub semi_major_orientation: Fixed,
    /// Standard deviation of the latitude error
    pub latitude_error_deviation: Fixed,
    /// Standard deviation of the longitude error
    pub longitude_error_deviation: Fixed,
    /// Standard deviation of the altitude error
    pub altitude_error_deviation: Fixed,
}

impl Sentence for Gst {
    const ID: SentenceId = SentenceId::Gst;

    fn content(i: &str) -> IResult<&str, Self> {
        let (i, time) = Option::<Time>::scan(i)?;
        let (i, rms_deviation) = fixed_field(i)?;
        let (i, semi_major_deviation) = fixed_field(i)?;
        let (i, semi_minor_deviation) = fixed_field(i)?;
        let (i, semi_major_orientation) = fixed_field(i)?;
        let (i, latitude_error_deviation) = fixed_field(i)?;
        let (i, longitude_error_deviation) = fixed_field(i)?;
        let (i, altitude_error_deviation) = fixed_field(i)?;

        Ok((
            i,
            Self {
                time,
                rms_deviation,
                semi_major_deviation,
                semi_minor_deviation,
                semi_major_orientation,
                latitude_error_deviation,
                longitude_error_deviation,
                altitude_error_deviation,
            },
        ))
    }
}
