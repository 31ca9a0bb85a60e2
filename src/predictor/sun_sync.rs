use log::{debug, error};

use crate::{
    constants::SUN_SYNC_NODAL_RATE_RAD_S,
    predictor::CUSTOM_SATELLITE_ID,
    prelude::{
        Epoch, Error, FrameConversion, GravityModel, J2Predictor, OrbitalElements, SunSyncDesign,
    },
};

use hifitime::Unit;

/// Solved shape of a Sun-synchronous orbit
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct SunSyncShape {
    pub sma_km: f64,
    pub ecc: f64,
    pub inc_deg: f64,
}

/// Solves the missing shape parameter of a [SunSyncDesign] so the J2 nodal
/// regression equals Earth's mean apparent solar motion:
///
/// -3.Re².J2.sqrt(μ).cos(i) / (2.a^(7/2).(1-e²)²) = Ω☉
fn solve_shape(design: &SunSyncDesign, gravity: &GravityModel) -> Result<SunSyncShape, Error> {
    let known = design.known_parameters();
    if known != 2 {
        return Err(Error::InvalidSunSyncParameters(known));
    }

    let omega = SUN_SYNC_NODAL_RATE_RAD_S;
    let j2_term =
        3.0 * gravity.equatorial_radius_km.powi(2) * gravity.j2 * gravity.mu_km3_s2.sqrt();

    let shape = match (design.altitude_km, design.ecc, design.inc_deg) {
        (Some(altitude_km), Some(ecc), None) => {
            // nominal case: solve for inclination
            let sma_km = gravity.equatorial_radius_km + altitude_km;
            let cos_i = -2.0 * sma_km.powf(3.5) * omega * (1.0 - ecc.powi(2)).powi(2) / j2_term;

            if !(-1.0..=1.0).contains(&cos_i) {
                return Err(no_solution(design));
            }

            SunSyncShape {
                sma_km,
                ecc,
                inc_deg: cos_i.acos().to_degrees(),
            }
        },
        (Some(altitude_km), None, Some(inc_deg)) => {
            // solve for eccentricity
            let sma_km = gravity.equatorial_radius_km + altitude_km;
            let radicand = -j2_term * inc_deg.to_radians().cos() / (2.0 * omega * sma_km.powf(3.5));

            if radicand.is_nan() || radicand < 0.0 {
                return Err(no_solution(design));
            }

            let ecc_2 = 1.0 - radicand.sqrt();
            if ecc_2.is_nan() || ecc_2 < 0.0 {
                return Err(no_solution(design));
            }

            SunSyncShape {
                sma_km,
                ecc: ecc_2.sqrt(),
                inc_deg,
            }
        },
        (None, Some(ecc), Some(inc_deg)) => {
            // solve for semi-major axis
            let base = -inc_deg.to_radians().cos() * j2_term
                / (2.0 * omega * (1.0 - ecc.powi(2)).powi(2));

            if !base.is_finite() || base <= 0.0 {
                return Err(no_solution(design));
            }

            SunSyncShape {
                sma_km: base.powf(2.0 / 7.0),
                ecc,
                inc_deg,
            }
        },
        _ => unreachable!("exactly two known parameters"),
    };

    if !(shape.sma_km.is_finite() && shape.ecc.is_finite() && shape.inc_deg.is_finite()) {
        return Err(no_solution(design));
    }

    Ok(shape)
}

fn no_solution(design: &SunSyncDesign) -> Error {
    error!(
        "no sun-synchronous orbit for alt={:?}km e={:?} i={:?}°",
        design.altitude_km, design.ecc, design.inc_deg
    );
    Error::SunSyncOrbitDoesNotExist
}

/// Reference [Epoch] of a [SunSyncDesign]: the LTAN hour (UTC) of the requested day.
/// The current day is used when no date is specified.
pub(crate) fn design_epoch(design: &SunSyncDesign) -> Result<Epoch, Error> {
    if !design.ltan_h.is_finite() {
        return Err(Error::InvalidLocalTime(design.ltan_h));
    }

    let date = match design.date {
        Some(date) => date,
        None => Epoch::now().map_err(|_| Error::SystemTime)?,
    };

    let (year, month, day, _, _, _, _) = date.to_gregorian_utc();
    let midnight = Epoch::from_gregorian_utc_at_midnight(year, month, day);

    Ok(midnight + design.ltan_h.rem_euclid(24.0) * Unit::Hour)
}

/// Right ascension of the ascending node (degrees, in [0, 360°)) of a
/// Sun-synchronous plane whose ascending node is crossed at this [Epoch],
/// above the Greenwich meridian.
///
/// When the reference epoch is the LTAN hour (UTC), the mean local solar
/// time at Greenwich equals the LTAN, so the node right ascension is the
/// Greenwich sidereal angle.
pub fn raan_from_ltan(epoch: Epoch, frames: &dyn FrameConversion) -> f64 {
    frames.sidereal_angle(epoch).to_degrees().rem_euclid(360.0)
}

impl J2Predictor {
    /// Designs a Sun-synchronous [J2Predictor].
    ///
    /// Exactly two of altitude, eccentricity and inclination must be specified,
    /// otherwise this fails with [Error::InvalidSunSyncParameters].
    /// The third one is solved, which fails with [Error::SunSyncOrbitDoesNotExist]
    /// when the requested combination has no real solution.
    ///
    /// The reference epoch is the LTAN hour of the requested day,
    /// at which the satellite crosses its ascending node (argument of perigee
    /// is null) with the true anomaly offset of the design.
    pub fn sun_synchronous(
        design: &SunSyncDesign,
        gravity: GravityModel,
        frames: &dyn FrameConversion,
    ) -> Result<Self, Error> {
        let shape = solve_shape(design, &gravity)?;

        let epoch = design_epoch(design)?;
        let raan_deg = raan_from_ltan(epoch, frames);

        debug!(
            "{} - sun-synchronous design: a={:.3}km e={} i={:.4}° raan={:.4}°",
            epoch, shape.sma_km, shape.ecc, shape.inc_deg, raan_deg
        );

        let elements = OrbitalElements::new(
            shape.sma_km,
            shape.ecc,
            shape.inc_deg,
            raan_deg,
            0.0,
            design.ta_deg,
            epoch,
        )?;

        Ok(Self {
            satellite_id: CUSTOM_SATELLITE_ID.to_string(),
            elements,
            gravity,
        })
    }
}
