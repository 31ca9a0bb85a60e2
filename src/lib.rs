#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod anomaly;
mod cfg;
mod constants;
mod conversion;
mod elements;
mod error;
mod frame;
mod predictor;
mod tle;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::anomaly::{
        eccentric_to_mean, eccentric_to_true, mean_to_eccentric, mean_to_true, normalize_angle,
        true_to_eccentric, true_to_mean,
    };
    pub use crate::cfg::{Error as ConfigError, GravityModel, SunSyncDesign};
    pub use crate::constants::{EARTH_ANGULAR_VEL_RAD, SUN_SYNC_NODAL_RATE_RAD_S};
    pub use crate::conversion::{elements_to_state, state_to_elements, OsculatingElements};
    pub use crate::elements::{OrbitalElements, StateVector};
    pub use crate::error::Error;
    pub use crate::frame::{FrameConversion, MeanSiderealFrame};
    pub use crate::predictor::{
        raan_from_ltan, sun_sync_plane_constellation, J2Predictor, KeplerianPredictor, Predictor,
        SecularRates, SunSyncPlane,
    };
    pub use crate::tle::{EcefState, Sgp4Builder, Sgp4Predictor, Tle, TleSource};
    // re-export
    pub use hifitime::{Duration, Epoch, TimeScale, Unit};
    pub use nalgebra::Vector3;
}

// pub export
pub use error::Error;
