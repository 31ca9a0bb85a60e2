use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Only elliptical orbits (0 <= e < 1) can be propagated.
    /// Parabolic and hyperbolic trajectories are rejected at construction.
    #[error("non elliptical orbit (e={0}): only 0 <= e < 1 is supported")]
    NonEllipticalOrbit(f64),

    /// Semi-major axis must be strictly positive and finite.
    #[error("invalid semi-major axis: {0} km")]
    InvalidSemiMajorAxis(f64),

    /// Element angles must be finite values (degrees).
    #[error("invalid orbital angle: {0}°")]
    InvalidAngle(f64),

    /// Local Time of Ascending Node must be a finite number of hours.
    #[error("invalid local time of ascending node: {0}h")]
    InvalidLocalTime(f64),

    /// Sun-synchronous design requires exactly two of
    /// altitude, eccentricity and inclination. The number of
    /// parameters that were actually given is reported.
    #[error("sun-synchronous design requires exactly 2 known parameters, got {0}")]
    InvalidSunSyncParameters(usize),

    /// The Sun-synchronous closed form equations have no real solution
    /// for the requested parameters.
    #[error("sun-synchronous orbit does not exist with given parameters")]
    SunSyncOrbitDoesNotExist,

    /// Newton-Raphson iterations on Kepler's equation did not converge.
    /// This should not happen for valid elliptical orbits.
    #[error("kepler solver failure (M={mean_anomaly_rad} rad, e={ecc})")]
    KeplerSolverFailure { mean_anomaly_rad: f64, ecc: f64 },

    /// [crate::prelude::TleSource] could not provide a two-line element set.
    #[error("tle source error: {0}")]
    TleSource(String),

    /// [crate::prelude::Sgp4Predictor] failed to build or to propagate.
    #[error("sgp4 error: {0}")]
    Sgp4(String),

    /// Current date is required (no reference date given) but could not be determined.
    #[error("failed to determine current system time")]
    SystemTime,
}
