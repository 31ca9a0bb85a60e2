//! Classical orbital elements <=> inertial state vector conversions.
use nalgebra::{Rotation3, Vector3};

use crate::anomaly::normalize_angle;

/// Below this threshold, eccentricity or node vector magnitude
/// are considered null and the associated angles are undefined.
const SINGULARITY_TOLERANCE: f64 = 1.0E-8;

/// Osculating classical elements, as produced by [state_to_elements].
/// Angles are expressed in radians.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct OsculatingElements {
    /// Semi-latus rectum (km)
    pub p_km: f64,
    /// Eccentricity
    pub ecc: f64,
    /// Inclination, in [0, π]
    pub inc_rad: f64,
    /// Right ascension of the ascending node, in [0, 2π)
    pub raan_rad: f64,
    /// Argument of perigee, in [0, 2π)
    pub argp_rad: f64,
    /// True anomaly, in [0, 2π)
    pub ta_rad: f64,
}

impl OsculatingElements {
    /// Semi-major axis (km)
    pub fn sma_km(&self) -> f64 {
        self.p_km / (1.0 - self.ecc.powi(2))
    }
}

/// Orbital plane (perifocal) to inertial frame rotation:
/// argp about the orbit normal, then inc about the line of nodes,
/// then raan about the polar axis (3-1-3 sequence).
pub(crate) fn perifocal_to_inertial(inc_rad: f64, raan_rad: f64, argp_rad: f64) -> Rotation3<f64> {
    let rot_z_raan = Rotation3::from_axis_angle(&Vector3::z_axis(), raan_rad);
    let rot_x_inc = Rotation3::from_axis_angle(&Vector3::x_axis(), inc_rad);
    let rot_z_argp = Rotation3::from_axis_angle(&Vector3::z_axis(), argp_rad);
    rot_z_raan * rot_x_inc * rot_z_argp
}

/// Converts classical elements to inertial position (km) and velocity (km/s).
///
/// ## Input
/// - mu_km3_s2: gravitational parameter
/// - p_km: semi-latus rectum
/// - ecc: eccentricity
/// - inc_rad, raan_rad, argp_rad, ta_rad: angles in radians
pub fn elements_to_state(
    mu_km3_s2: f64,
    p_km: f64,
    ecc: f64,
    inc_rad: f64,
    raan_rad: f64,
    argp_rad: f64,
    ta_rad: f64,
) -> (Vector3<f64>, Vector3<f64>) {
    let (sin_ta, cos_ta) = ta_rad.sin_cos();

    let r_km = p_km / (1.0 + ecc * cos_ta);
    let v_scale = (mu_km3_s2 / p_km).sqrt();

    let r_pqw = Vector3::new(r_km * cos_ta, r_km * sin_ta, 0.0);
    let v_pqw = Vector3::new(-v_scale * sin_ta, v_scale * (ecc + cos_ta), 0.0);

    let rot3 = perifocal_to_inertial(inc_rad, raan_rad, argp_rad);

    (rot3 * r_pqw, rot3 * v_pqw)
}

/// Converts inertial position (km) and velocity (km/s) to osculating elements.
///
/// Undefined angles follow the usual conventions:
/// - circular inclined orbit: argp = 0, ta is the argument of latitude
/// - elliptical equatorial orbit: raan = 0, argp is the longitude of perigee
/// - circular equatorial orbit: raan = argp = 0, ta is the true longitude
///
/// so that converting the result back yields the input state.
pub fn state_to_elements(
    mu_km3_s2: f64,
    r_km: &Vector3<f64>,
    v_km_s: &Vector3<f64>,
) -> OsculatingElements {
    let h = r_km.cross(v_km_s);
    let h_norm = h.norm();
    let n = Vector3::z().cross(&h);
    let n_norm = n.norm();

    let r_norm = r_km.norm();
    let e_vec = ((v_km_s.norm_squared() - mu_km3_s2 / r_norm) * r_km - r_km.dot(v_km_s) * v_km_s)
        / mu_km3_s2;
    let ecc = e_vec.norm();

    let p_km = h_norm.powi(2) / mu_km3_s2;
    let inc_rad = (h.z / h_norm).clamp(-1.0, 1.0).acos();

    let circular = ecc < SINGULARITY_TOLERANCE;
    let equatorial = n_norm / h_norm < SINGULARITY_TOLERANCE;

    let (raan_rad, argp_rad, ta_rad) = match (circular, equatorial) {
        (true, true) => (0.0, 0.0, r_km.y.atan2(r_km.x) * h.z.signum()),
        (true, false) => {
            let raan = n.y.atan2(n.x);
            let u = (h.dot(&n.cross(r_km)) / h_norm).atan2(r_km.dot(&n));
            (raan, 0.0, u)
        },
        (false, true) => {
            let argp = e_vec.y.atan2(e_vec.x) * h.z.signum();
            let ta = (h.dot(&e_vec.cross(r_km)) / h_norm).atan2(r_km.dot(&e_vec));
            (0.0, argp, ta)
        },
        (false, false) => {
            let raan = n.y.atan2(n.x);
            let argp = (h.dot(&n.cross(&e_vec)) / h_norm).atan2(e_vec.dot(&n));
            let ta = (h.dot(&e_vec.cross(r_km)) / h_norm).atan2(r_km.dot(&e_vec));
            (raan, argp, ta)
        },
    };

    OsculatingElements {
        p_km,
        ecc,
        inc_rad,
        raan_rad: normalize_angle(raan_rad),
        argp_rad: normalize_angle(argp_rad),
        ta_rad: normalize_angle(ta_rad),
    }
}
