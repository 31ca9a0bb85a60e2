use log::debug;

use crate::{
    anomaly::{mean_to_true, normalize_angle, true_to_mean},
    conversion::elements_to_state,
    frame::FrameConversion,
    prelude::{Epoch, Error, GravityModel, OrbitalElements, StateVector, Vector3},
};

mod constellation;
mod j2;
mod keplerian;
mod sun_sync;

pub use constellation::{sun_sync_plane_constellation, SunSyncPlane};
pub use j2::J2Predictor;
pub use keplerian::KeplerianPredictor;
pub use sun_sync::raan_from_ltan;

/// Satellite identifier of predictors that are not built from actual observations
pub(crate) const CUSTOM_SATELLITE_ID: &str = "<custom>";

/// Linear (secular) drift rates applied to the orbital angles.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SecularRates {
    /// Right ascension of the ascending node drift (rad/s)
    pub raan_rad_s: f64,
    /// Argument of perigee drift (rad/s)
    pub argp_rad_s: f64,
    /// Total mean anomaly rate (rad/s), including the mean motion
    pub mean_anomaly_rad_s: f64,
}

/// Propagated orbital angles (rad)
#[derive(Debug, Copy, Clone)]
pub(crate) struct PropagatedAngles {
    pub raan_rad: f64,
    pub argp_rad: f64,
    pub ta_rad: f64,
}

/// Advances the orbital angles of these [OrbitalElements] by dt_s seconds
/// (signed), at constant [SecularRates]. Semi-major axis, eccentricity
/// and inclination are held fixed.
pub(crate) fn secular_angles(
    elements: &OrbitalElements,
    rates: &SecularRates,
    dt_s: f64,
) -> Result<PropagatedAngles, Error> {
    let ecc = elements.ecc();

    let m0 = true_to_mean(elements.ta_deg().to_radians(), ecc);
    let m = m0 + rates.mean_anomaly_rad_s * dt_s;

    Ok(PropagatedAngles {
        raan_rad: elements.raan_deg().to_radians() + rates.raan_rad_s * dt_s,
        argp_rad: elements.argp_deg().to_radians() + rates.argp_rad_s * dt_s,
        ta_rad: mean_to_true(m, ecc)?,
    })
}

/// Propagates [OrbitalElements] to desired [Epoch] at constant [SecularRates].
pub(crate) fn secular_propagation(
    elements: &OrbitalElements,
    gravity: &GravityModel,
    rates: &SecularRates,
    epoch: Epoch,
) -> Result<StateVector, Error> {
    let dt_s = (epoch - elements.epoch()).to_seconds();

    let angles = secular_angles(elements, rates, dt_s)?;

    let (position_km, velocity_km_s) = elements_to_state(
        gravity.mu_km3_s2,
        elements.semi_latus_rectum_km(),
        elements.ecc(),
        elements.inc_deg().to_radians(),
        angles.raan_rad,
        angles.argp_rad,
        angles.ta_rad,
    );

    debug!(
        "{} - propagated dt={}s ta={:.6}° r={:.3}km",
        epoch,
        dt_s,
        angles.ta_rad.to_degrees(),
        position_km.norm()
    );

    Ok(StateVector {
        epoch,
        position_km,
        velocity_km_s,
    })
}

/// Returns new [OrbitalElements], valid at desired [Epoch],
/// propagated at constant [SecularRates]. Angles are wrapped to [0, 360°).
pub(crate) fn secular_elements(
    elements: &OrbitalElements,
    rates: &SecularRates,
    epoch: Epoch,
) -> Result<OrbitalElements, Error> {
    let dt_s = (epoch - elements.epoch()).to_seconds();
    let angles = secular_angles(elements, rates, dt_s)?;

    Ok(elements.with_angles_deg(
        normalize_angle(angles.raan_rad).to_degrees(),
        normalize_angle(angles.argp_rad).to_degrees(),
        angles.ta_rad.to_degrees(),
        epoch,
    ))
}

/// [Predictor] is the common capability of all analytic propagators.
///
/// Propagation is a pure function of the target [Epoch]: predicting
/// twice the same [Epoch] gives the same result, and predictors can be
/// shared between threads without synchronization.
pub trait Predictor {
    /// Satellite identifier
    fn satellite_id(&self) -> &str;

    /// Reference [Epoch] of the underlying [OrbitalElements]
    fn epoch(&self) -> Epoch;

    /// Propagates to desired [Epoch] (which may precede the reference [Epoch])
    /// and returns the ECI [StateVector].
    fn propagate(&self, epoch: Epoch) -> Result<StateVector, Error>;

    /// Propagates and only returns ECI position (km)
    fn position(&self, epoch: Epoch) -> Result<Vector3<f64>, Error> {
        Ok(self.propagate(epoch)?.position_km)
    }

    /// Propagates and returns ECEF position (km) and velocity (km/s).
    /// Both ECI vectors are rotated, see [FrameConversion::eci_to_ecef_state].
    fn position_ecef(
        &self,
        epoch: Epoch,
        frames: &dyn FrameConversion,
    ) -> Result<(Vector3<f64>, Vector3<f64>), Error> {
        let state = self.propagate(epoch)?;
        let sidereal_angle = frames.sidereal_angle(epoch);
        Ok(frames.eci_to_ecef_state(&state.position_km, &state.velocity_km_s, sidereal_angle))
    }
}
