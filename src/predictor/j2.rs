use crate::{
    predictor::{secular_elements, secular_propagation, SecularRates, CUSTOM_SATELLITE_ID},
    prelude::{
        Epoch, Error, FrameConversion, GravityModel, OrbitalElements, Predictor, Sgp4Builder,
        StateVector, TleSource,
    },
    tle::osculating_elements_from_tle,
};

/// [J2Predictor] extends the two-body propagation with the secular
/// effects of Earth oblateness (J2): linear drift of the right ascension of
/// the ascending node, of the argument of perigee and of the mean anomaly.
/// Semi-major axis, eccentricity and inclination remain constant.
/// See Vallado (3rd edition), algorithm 64.
#[derive(Debug, Clone, PartialEq)]
pub struct J2Predictor {
    /// Satellite identifier
    pub(crate) satellite_id: String,
    /// Reference [OrbitalElements]
    pub(crate) elements: OrbitalElements,
    /// [GravityModel] in use
    pub(crate) gravity: GravityModel,
}

impl J2Predictor {
    /// Builds a new [J2Predictor] from [OrbitalElements].
    /// Fails with [Error::NonEllipticalOrbit] if e >= 1.
    pub fn new(elements: OrbitalElements, gravity: GravityModel) -> Result<Self, Error> {
        elements.validate()?;
        Ok(Self {
            satellite_id: CUSTOM_SATELLITE_ID.to_string(),
            elements,
            gravity,
        })
    }

    /// Builds a [J2Predictor] from approximate osculating elements, obtained
    /// from the latest TLE (or the TLE applicable to `date`) of this satellite.
    /// Refer to [crate::prelude::KeplerianPredictor::from_tle].
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

    /// Unperturbed mean motion (rad/min)
    pub fn mean_motion(&self) -> f64 {
        self.elements.mean_motion_rad_min(&self.gravity)
    }

    /// J2 [SecularRates]
    pub fn secular_rates(&self) -> SecularRates {
        let n = self.elements.mean_motion_rad_s(&self.gravity);
        let p = self.elements.semi_latus_rectum_km();
        let (sin_i, cos_i) = self.elements.inc_deg().to_radians().sin_cos();
        let sin_i_2 = sin_i.powi(2);

        let k = self.gravity.j2_rate_factor(n, p);

        let raan_dot = -k / 2.0 * cos_i;
        let argp_dot = k / 4.0 * (4.0 - 5.0 * sin_i_2);
        let m0_dot = k / 4.0 * (2.0 - 3.0 * sin_i_2) * (1.0 - self.elements.ecc().powi(2)).sqrt();

        SecularRates {
            raan_rad_s: raan_dot,
            argp_rad_s: argp_dot,
            mean_anomaly_rad_s: n + m0_dot,
        }
    }

    /// Returns new [OrbitalElements] valid at desired [Epoch],
    /// with drifted node, perigee and anomaly.
    pub fn elements_at(&self, epoch: Epoch) -> Result<OrbitalElements, Error> {
        secular_elements(&self.elements, &self.secular_rates(), epoch)
    }
}

impl Predictor for J2Predictor {
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
