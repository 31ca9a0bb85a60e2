//! True, eccentric and mean anomaly conversions (elliptical orbits only).
//!
//! All angles are expressed in radians and every returned anomaly
//! is normalized to [0, 2π).
use log::error;
use std::f64::consts::{PI, TAU};

use crate::{
    constants::{KEPLER_MAX_ITERATIONS, KEPLER_TOLERANCE_RAD},
    prelude::Error,
};

/// Wraps any angle (rad) into [0, 2π)
pub fn normalize_angle(angle_rad: f64) -> f64 {
    let wrapped = angle_rad.rem_euclid(TAU);
    // rem_euclid may round up to exactly 2π for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Converts true anomaly to eccentric anomaly.
pub fn true_to_eccentric(ta_rad: f64, ecc: f64) -> f64 {
    let (sin_ta, cos_ta) = ta_rad.sin_cos();
    let sin_e = (1.0 - ecc.powi(2)).sqrt() * sin_ta;
    let cos_e = ecc + cos_ta;
    normalize_angle(sin_e.atan2(cos_e))
}

/// Converts eccentric anomaly to mean anomaly (Kepler's equation).
pub fn eccentric_to_mean(e_rad: f64, ecc: f64) -> f64 {
    normalize_angle(e_rad - ecc * e_rad.sin())
}

/// Converts eccentric anomaly to true anomaly.
pub fn eccentric_to_true(e_rad: f64, ecc: f64) -> f64 {
    let (sin_e, cos_e) = e_rad.sin_cos();
    let ta = ((1.0 - ecc.powi(2)).sqrt() * sin_e).atan2(cos_e - ecc);
    normalize_angle(ta)
}

/// Solves Kepler's equation E - e.sin(E) = M for the eccentric anomaly E,
/// using Newton-Raphson iterations.
///
/// Iterations start from E₀ = M when e < 0.8. Highly eccentric orbits
/// (e >= 0.8) start from E₀ = π instead, because the Newton sequence
/// started at M may oscillate there.
/// Fails with [Error::KeplerSolverFailure] when the residual is still
/// above tolerance after the maximal number of iterations.
pub fn mean_to_eccentric(m_rad: f64, ecc: f64) -> Result<f64, Error> {
    let m = normalize_angle(m_rad);

    let mut e_k = if ecc < 0.8 { m } else { PI };

    for _ in 0..KEPLER_MAX_ITERATIONS {
        let (sin_e, cos_e) = e_k.sin_cos();
        let residual = e_k - ecc * sin_e - m;

        if residual.abs() < KEPLER_TOLERANCE_RAD {
            return Ok(normalize_angle(e_k));
        }

        e_k -= residual / (1.0 - ecc * cos_e);
    }

    error!("kepler solver in failure (M={}, e={})", m, ecc);

    Err(Error::KeplerSolverFailure {
        mean_anomaly_rad: m,
        ecc,
    })
}

/// Converts true anomaly to mean anomaly, in [0, 2π).
pub fn true_to_mean(ta_rad: f64, ecc: f64) -> f64 {
    eccentric_to_mean(true_to_eccentric(ta_rad, ecc), ecc)
}

/// Converts mean anomaly to true anomaly, in [0, 2π), by solving Kepler's equation.
pub fn mean_to_true(m_rad: f64, ecc: f64) -> Result<f64, Error> {
    let e_rad = mean_to_eccentric(m_rad, ecc)?;
    Ok(eccentric_to_true(e_rad, ecc))
}

/// Smallest (absolute) angular distance between two angles, in radians
#[cfg(test)]
pub(crate) fn angular_distance(lhs_rad: f64, rhs_rad: f64) -> f64 {
    let delta = normalize_angle(lhs_rad - rhs_rad);
    delta.min(TAU - delta)
}
