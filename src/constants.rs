use std::f64::consts::TAU;

/// Earth angular velocity, in WGS84 frame rad/s
pub const EARTH_ANGULAR_VEL_RAD: f64 = 7.2921151467E-5;

/// WGS84 Earth gravitational constant (km^3 s-2), as used by SGP4
pub const WGS84_MU_KM3_S2: f64 = 398600.5;

/// WGS84 Earth equatorial radius (kilometers)
pub const WGS84_EQUATORIAL_RADIUS_KM: f64 = 6378.137;

/// WGS84 J2 zonal harmonic
pub const WGS84_J2: f64 = 0.00108262998905;

/// WGS72 Earth gravitational constant (km^3 s-2)
pub const WGS72_MU_KM3_S2: f64 = 398600.8;

/// WGS72 Earth equatorial radius (kilometers)
pub const WGS72_EQUATORIAL_RADIUS_KM: f64 = 6378.135;

/// WGS72 J2 zonal harmonic
pub const WGS72_J2: f64 = 0.001082616;

/// Mean tropical year, in days
pub const TROPICAL_YEAR_DAYS: f64 = 365.2421897;

/// Earth's mean apparent solar motion (rad/s), which is the nodal
/// regression rate of any Sun-synchronous orbit.
pub const SUN_SYNC_NODAL_RATE_RAD_S: f64 = TAU / (86400.0 * TROPICAL_YEAR_DAYS);

/// Kepler solver: residual tolerance (rad)
pub(crate) const KEPLER_TOLERANCE_RAD: f64 = 1.0E-12;

/// Kepler solver: maximal number of Newton-Raphson iterations
pub(crate) const KEPLER_MAX_ITERATIONS: usize = 50;
