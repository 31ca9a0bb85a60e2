//! Two-line element (TLE) and SGP4 collaborators.
//!
//! TLE retrieval and SGP4 propagation are not implemented here:
//! applications provide them through the [TleSource], [Sgp4Builder]
//! and [Sgp4Predictor] traits. They are only consulted at construction time,
//! propagation never performs I/O.
use log::debug;

use crate::{
    conversion::state_to_elements,
    prelude::{Epoch, Error, FrameConversion, GravityModel, OrbitalElements, Vector3},
};

/// Two-line element set
#[derive(Debug, Clone, PartialEq)]
pub struct Tle {
    /// First and second lines
    pub lines: (String, String),
}

impl Tle {
    /// Builds a new [Tle] from its two lines
    pub fn new(line1: &str, line2: &str) -> Self {
        Self {
            lines: (line1.to_string(), line2.to_string()),
        }
    }
}

/// Any [Tle] provider (local file, catalog, remote server..)
/// should implement the [TleSource] trait.
pub trait TleSource {
    /// Provide the [Tle] of this satellite, that applies to desired date.
    fn tle(&self, satellite_id: &str, date: Epoch) -> Result<Tle, Error>;
}

/// Earth fixed position (km) and velocity (km/s)
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct EcefState {
    /// ECEF position (km)
    pub position_ecef_km: Vector3<f64>,
    /// Inertial velocity (km/s) rotated into ECEF axes
    pub velocity_ecef_km_s: Vector3<f64>,
}

/// SGP4 class predictor, built from a [Tle].
pub trait Sgp4Predictor {
    /// [Tle] epoch
    fn epoch(&self) -> Epoch;

    /// Predicts the [EcefState] at desired [Epoch]
    fn position(&self, epoch: Epoch) -> Result<EcefState, Error>;
}

/// [Sgp4Builder] creates [Sgp4Predictor]s from [Tle]s
pub trait Sgp4Builder {
    type Predictor: Sgp4Predictor;

    /// Builds the [Sgp4Predictor] of this [Tle], using desired [GravityModel].
    fn build(&self, tle: &Tle, gravity: &GravityModel) -> Result<Self::Predictor, Error>;
}

/// Approximates osculating [OrbitalElements] at [Tle] epoch:
/// the SGP4 state at [Tle] epoch is rotated to ECI then converted.
pub(crate) fn osculating_elements_from_tle<S, B, F>(
    satellite_id: &str,
    source: &S,
    sgp4: &B,
    frames: &F,
    gravity: &GravityModel,
    date: Option<Epoch>,
) -> Result<OrbitalElements, Error>
where
    S: TleSource,
    B: Sgp4Builder,
    F: FrameConversion + ?Sized,
{
    let date = match date {
        Some(date) => date,
        None => Epoch::now().map_err(|_| Error::SystemTime)?,
    };

    let tle = source.tle(satellite_id, date)?;
    let predictor = sgp4.build(&tle, gravity)?;

    let epoch = predictor.epoch();
    let ecef = predictor.position(epoch)?;

    let sidereal_angle = frames.sidereal_angle(epoch);
    let (position_eci, velocity_eci) = frames.ecef_to_eci_state(
        &ecef.position_ecef_km,
        &ecef.velocity_ecef_km_s,
        sidereal_angle,
    );

    let osculating = state_to_elements(gravity.mu_km3_s2, &position_eci, &velocity_eci);
    let elements = OrbitalElements::from_osculating(&osculating, epoch)?;

    debug!(
        "{}({}) - tle osculating elements: a={:.3}km e={:.6} i={:.4}°",
        epoch,
        satellite_id,
        elements.sma_km(),
        elements.ecc(),
        elements.inc_deg()
    );

    Ok(elements)
}
