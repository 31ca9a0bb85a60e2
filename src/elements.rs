#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    conversion::OsculatingElements,
    prelude::{Duration, Epoch, Error, GravityModel, Vector3},
};

use hifitime::Unit;
use std::f64::consts::TAU;

/// Classical (osculating) [OrbitalElements] valid at a reference [Epoch].
/// [OrbitalElements] are immutable: propagation derives new states or new
/// [OrbitalElements] and never modifies them.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrbitalElements {
    /// Semi-major axis (km)
    sma_km: f64,
    /// Eccentricity
    ecc: f64,
    /// Inclination (degrees)
    inc_deg: f64,
    /// Right ascension of the ascending node (degrees)
    raan_deg: f64,
    /// Argument of perigee (degrees)
    argp_deg: f64,
    /// True anomaly (degrees)
    ta_deg: f64,
    /// Reference [Epoch]
    epoch: Epoch,
}

impl OrbitalElements {
    /// Builds new [OrbitalElements]. Only elliptical orbits are supported:
    /// fails with [Error::NonEllipticalOrbit] unless 0 <= e < 1.
    ///
    /// ## Input
    /// - sma_km: semi-major axis (km), strictly positive
    /// - ecc: eccentricity
    /// - inc_deg: inclination (degrees)
    /// - raan_deg: right ascension of the ascending node (degrees)
    /// - argp_deg: argument of perigee (degrees)
    /// - ta_deg: true anomaly (degrees)
    /// - epoch: reference [Epoch]
    pub fn new(
        sma_km: f64,
        ecc: f64,
        inc_deg: f64,
        raan_deg: f64,
        argp_deg: f64,
        ta_deg: f64,
        epoch: Epoch,
    ) -> Result<Self, Error> {
        let s = Self {
            sma_km,
            ecc,
            inc_deg,
            raan_deg,
            argp_deg,
            ta_deg,
            epoch,
        };
        s.validate()?;
        Ok(s)
    }

    /// Verifies these [OrbitalElements] describe an elliptical orbit
    /// with positive semi-major axis and finite angles.
    pub fn validate(&self) -> Result<(), Error> {
        if !(0.0..1.0).contains(&self.ecc) {
            return Err(Error::NonEllipticalOrbit(self.ecc));
        }

        if !self.sma_km.is_finite() || self.sma_km <= 0.0 {
            return Err(Error::InvalidSemiMajorAxis(self.sma_km));
        }

        for angle_deg in [self.inc_deg, self.raan_deg, self.argp_deg, self.ta_deg] {
            if !angle_deg.is_finite() {
                return Err(Error::InvalidAngle(angle_deg));
            }
        }

        Ok(())
    }

    /// Builds [OrbitalElements] from [OsculatingElements] obtained
    /// at this [Epoch].
    pub(crate) fn from_osculating(osc: &OsculatingElements, epoch: Epoch) -> Result<Self, Error> {
        Self::new(
            osc.sma_km(),
            osc.ecc,
            osc.inc_rad.to_degrees(),
            osc.raan_rad.to_degrees(),
            osc.argp_rad.to_degrees(),
            osc.ta_rad.to_degrees(),
            epoch,
        )
    }

    /// Copies and returns [OrbitalElements] with updated true anomaly (degrees).
    pub fn with_true_anomaly_deg(&self, ta_deg: f64) -> Self {
        let mut s = *self;
        s.ta_deg = ta_deg;
        s
    }

    /// Copies and returns [OrbitalElements] valid at another [Epoch],
    /// with new orientation and position in the orbital plane.
    pub(crate) fn with_angles_deg(
        &self,
        raan_deg: f64,
        argp_deg: f64,
        ta_deg: f64,
        epoch: Epoch,
    ) -> Self {
        let mut s = *self;
        s.raan_deg = raan_deg;
        s.argp_deg = argp_deg;
        s.ta_deg = ta_deg;
        s.epoch = epoch;
        s
    }

    /// Semi-major axis (km)
    pub fn sma_km(&self) -> f64 {
        self.sma_km
    }

    /// Eccentricity
    pub fn ecc(&self) -> f64 {
        self.ecc
    }

    /// Inclination (degrees)
    pub fn inc_deg(&self) -> f64 {
        self.inc_deg
    }

    /// Right ascension of the ascending node (degrees)
    pub fn raan_deg(&self) -> f64 {
        self.raan_deg
    }

    /// Argument of perigee (degrees)
    pub fn argp_deg(&self) -> f64 {
        self.argp_deg
    }

    /// True anomaly (degrees)
    pub fn ta_deg(&self) -> f64 {
        self.ta_deg
    }

    /// Reference [Epoch]
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Semi-latus rectum p = a(1-e²), in km
    pub fn semi_latus_rectum_km(&self) -> f64 {
        self.sma_km * (1.0 - self.ecc.powi(2))
    }

    /// Unperturbed mean motion n = sqrt(μ/a³), in rad/s
    pub fn mean_motion_rad_s(&self, gravity: &GravityModel) -> f64 {
        (gravity.mu_km3_s2 / self.sma_km.powi(3)).sqrt()
    }

    /// Unperturbed mean motion, in rad/min
    pub fn mean_motion_rad_min(&self, gravity: &GravityModel) -> f64 {
        self.mean_motion_rad_s(gravity) * 60.0
    }

    /// Keplerian orbital period
    pub fn period(&self, gravity: &GravityModel) -> Duration {
        (TAU / self.mean_motion_rad_s(gravity)) * Unit::Second
    }
}

/// Position and velocity, expressed in an Earth-Centered Inertial frame.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StateVector {
    /// [Epoch] of this state
    pub epoch: Epoch,
    /// ECI position (km)
    pub position_km: Vector3<f64>,
    /// ECI velocity (km/s)
    pub velocity_km_s: Vector3<f64>,
}

impl StateVector {
    /// Orbital radius (km)
    pub fn radius_km(&self) -> f64 {
        self.position_km.norm()
    }

    /// Inertial speed (km/s)
    pub fn speed_km_s(&self) -> f64 {
        self.velocity_km_s.norm()
    }
}
