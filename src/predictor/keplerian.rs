use crate::{
    predictor::{secular_elements, secular_propagation, SecularRates, CUSTOM_SATELLITE_ID},
    prelude::{
        Epoch, Error, FrameConversion, GravityModel, OrbitalElements, Predictor, Sgp4Builder,
        StateVector, TleSource,
    },
    tle::osculating_elements_from_tle,
};

/// [KeplerianPredictor] propagates osculating [OrbitalElements] assuming an
/// unperturbed two-body orbit: only the anomaly advances, at the mean motion,
/// all other elements are kept constant.
/// It is robust against singularities as long as the initial elements are
/// well defined, but only applies to elliptical orbits.
#[derive(Debug, Clone, PartialEq)]
pub struct KeplerianPredictor {
    /// Satellite identifier
    satellite_id: String,
    /// Reference [OrbitalElements]
    elements: OrbitalElements,
    /// [GravityModel] in use
    gravity: GravityModel,
}

impl KeplerianPredictor {
    /// Builds a new [KeplerianPredictor] from [OrbitalElements].
    /// Fails with [Error::NonEllipticalOrbit] if e >= 1.
    pub fn new(elements: OrbitalElements, gravity: GravityModel) -> Result<Self, Error> {
        elements.validate()?;
        Ok(Self {
            satellite_id: CUSTOM_SATELLITE_ID.to_string(),
            elements,
            gravity,
        })
    }

    /// Builds a [KeplerianPredictor] from approximate osculating elements,
    /// obtained from the latest TLE (or the TLE applicable to `date`) of this satellite.
    ///
    /// The SGP4 state at TLE epoch is converted to ECI then to osculating elements.
    /// Mean elements of the SGP4 theory are not osculating elements, so this
    /// is only an approximation.
    pub fn from_tle<S: TleSource, B: Sgp4Builder, F: FrameConversion + ?Sized>(
        satellite_id: &str,
        source: &S,
        sgp4: &B,
        frames: &F,
        gravity: GravityModel,
        date: Option<Epoch>,
    ) -> Result<Self, Error> {
        let elements =
            osculating_elements_from_tle(satellite_id, source, sgp4, frames, &gravity, date)?;

        Ok(Self {
            satellite_id: satellite_id.to_string(),
            elements,
            gravity,
        })
    }

    /// Reference [OrbitalElements]
    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }

    /// [GravityModel] in use
    pub fn gravity(&self) -> &GravityModel {
        &self.gravity
    }

    /// Mean motion (rad/min)
    pub fn mean_motion(&self) -> f64 {
        self.elements.mean_motion_rad_min(&self.gravity)
    }

    /// Two-body [SecularRates]: only the mean anomaly advances, at the mean motion.
    pub fn secular_rates(&self) -> SecularRates {
        SecularRates {
            raan_rad_s: 0.0,
            argp_rad_s: 0.0,
            mean_anomaly_rad_s: self.elements.mean_motion_rad_s(&self.gravity),
        }
    }

    /// Returns new [OrbitalElements] valid at desired [Epoch].
    pub fn elements_at(&self, epoch: Epoch) -> Result<OrbitalElements, Error> {
        secular_elements(&self.elements, &self.secular_rates(), epoch)
    }
}

impl Predictor for KeplerianPredictor {
    fn satellite_id(&self) -> &str {
        &self.satellite_id
    }

    fn epoch(&self) -> Epoch {
        self.elements.epoch()
    }

    fn propagate(&self, epoch: Epoch) -> Result<StateVector, Error> {
        secular_propagation(&self.elements, &self.gravity, &self.secular_rates(), epoch)
    }
}
