//! Earth fixed (ECEF) <=> Earth centered inertial (ECI) frame conversions.
use nalgebra::{Rotation3, Vector3};
use std::f64::consts::TAU;

use crate::{constants::EARTH_ANGULAR_VEL_RAD, prelude::Epoch};

/// Julian date of J2000 reference epoch
const J2000_JD: f64 = 2451545.0;

/// Any [FrameConversion] provider needs to implement the sidereal angle
/// computation. Rotations between ECEF and ECI are provided,
/// but may be refined by the implementer.
pub trait FrameConversion {
    /// Greenwich sidereal angle at this [Epoch], in radians.
    fn sidereal_angle(&self, epoch: Epoch) -> f64;

    /// Rotates an ECEF vector into ECI, given the sidereal angle (rad).
    fn ecef_to_eci(&self, ecef: &Vector3<f64>, sidereal_angle_rad: f64) -> Vector3<f64> {
        Rotation3::from_axis_angle(&Vector3::z_axis(), sidereal_angle_rad) * ecef
    }

    /// Rotates an ECI vector into ECEF, given the sidereal angle (rad).
    fn eci_to_ecef(&self, eci: &Vector3<f64>, sidereal_angle_rad: f64) -> Vector3<f64> {
        Rotation3::from_axis_angle(&Vector3::z_axis(), -sidereal_angle_rad) * eci
    }

    /// Converts ECEF position (km) and velocity (km/s) to ECI.
    /// Both vectors are rotated, which is the convention of
    /// SGP4 predictors that express their velocity in ECEF by rotation only.
    fn ecef_to_eci_state(
        &self,
        position_ecef_km: &Vector3<f64>,
        velocity_ecef_km_s: &Vector3<f64>,
        sidereal_angle_rad: f64,
    ) -> (Vector3<f64>, Vector3<f64>) {
        (
            self.ecef_to_eci(position_ecef_km, sidereal_angle_rad),
            self.ecef_to_eci(velocity_ecef_km_s, sidereal_angle_rad),
        )
    }

    /// Converts ECI position (km) and velocity (km/s) to ECEF,
    /// rotating both vectors. Inverse of [FrameConversion::ecef_to_eci_state].
    fn eci_to_ecef_state(
        &self,
        position_eci_km: &Vector3<f64>,
        velocity_eci_km_s: &Vector3<f64>,
        sidereal_angle_rad: f64,
    ) -> (Vector3<f64>, Vector3<f64>) {
        (
            self.eci_to_ecef(position_eci_km, sidereal_angle_rad),
            self.eci_to_ecef(velocity_eci_km_s, sidereal_angle_rad),
        )
    }

    /// Converts ECEF position (km) and a velocity (km/s) measured in the
    /// rotating frame to ECI. The ECI velocity includes the Earth rotation
    /// transport term ω × r.
    fn ecef_to_eci_rotating_state(
        &self,
        position_ecef_km: &Vector3<f64>,
        velocity_ecef_km_s: &Vector3<f64>,
        sidereal_angle_rad: f64,
    ) -> (Vector3<f64>, Vector3<f64>) {
        let position_eci = self.ecef_to_eci(position_ecef_km, sidereal_angle_rad);
        let omega = Vector3::new(0.0, 0.0, EARTH_ANGULAR_VEL_RAD);
        let velocity_eci =
            self.ecef_to_eci(velocity_ecef_km_s, sidereal_angle_rad) + omega.cross(&position_eci);
        (position_eci, velocity_eci)
    }

    /// Converts ECI position (km) and velocity (km/s) to ECEF, the velocity
    /// being expressed relative to the rotating Earth.
    /// Inverse of [FrameConversion::ecef_to_eci_rotating_state].
    fn eci_to_ecef_rotating_state(
        &self,
        position_eci_km: &Vector3<f64>,
        velocity_eci_km_s: &Vector3<f64>,
        sidereal_angle_rad: f64,
    ) -> (Vector3<f64>, Vector3<f64>) {
        let omega = Vector3::new(0.0, 0.0, EARTH_ANGULAR_VEL_RAD);
        let position_ecef = self.eci_to_ecef(position_eci_km, sidereal_angle_rad);
        let velocity_ecef = self.eci_to_ecef(
            &(velocity_eci_km_s - omega.cross(position_eci_km)),
            sidereal_angle_rad,
        );
        (position_ecef, velocity_ecef)
    }
}

/// [MeanSiderealFrame] uses the IAU-82 Greenwich Mean Sidereal Time,
/// which is the sidereal time model SGP4 is defined against.
/// UT1 is approximated by UTC.
#[derive(Debug, Default, Copy, Clone)]
pub struct MeanSiderealFrame {}

impl MeanSiderealFrame {
    /// IAU-82 GMST (rad), in [0, 2π), from UT1 julian date
    pub fn gmst82(jd_ut1: f64) -> f64 {
        let t_ut1 = (jd_ut1 - J2000_JD) / 36525.0;

        // seconds of time
        let gmst_s = -6.2E-6 * t_ut1.powi(3)
            + 0.093104 * t_ut1.powi(2)
            + (876600.0 * 3600.0 + 8640184.812866) * t_ut1
            + 67310.54841;

        // 1s of time = 1/240 deg
        (gmst_s.to_radians() / 240.0).rem_euclid(TAU)
    }
}

impl FrameConversion for MeanSiderealFrame {
    fn sidereal_angle(&self, epoch: Epoch) -> f64 {
        Self::gmst82(epoch.to_jde_utc_days())
    }
}
