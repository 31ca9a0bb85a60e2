use crate::prelude::Epoch;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

fn default_ltan_h() -> f64 {
    12.0
}

fn default_ta_deg() -> f64 {
    0.0
}

/// Sun-synchronous orbit design parameters.
///
/// Exactly two of altitude, eccentricity and inclination must be
/// defined: the third one is solved so the nodal regression matches
/// Earth's mean apparent solar motion.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SunSyncDesign {
    /// Altitude above the equatorial radius (km)
    #[cfg_attr(feature = "serde", serde(default))]
    pub altitude_km: Option<f64>,
    /// Eccentricity
    #[cfg_attr(feature = "serde", serde(default))]
    pub ecc: Option<f64>,
    /// Inclination (degrees)
    #[cfg_attr(feature = "serde", serde(default))]
    pub inc_deg: Option<f64>,
    /// Local Time of the Ascending Node (hours), noon by default
    #[cfg_attr(feature = "serde", serde(default = "default_ltan_h"))]
    pub ltan_h: f64,
    /// Reference date. Only the UTC calendar day is used.
    /// Defaults to today when not defined.
    #[cfg_attr(feature = "serde", serde(default))]
    pub date: Option<Epoch>,
    /// True anomaly offset at the reference epoch (degrees),
    /// to place several satellites in the same plane.
    #[cfg_attr(feature = "serde", serde(default = "default_ta_deg"))]
    pub ta_deg: f64,
}

impl Default for SunSyncDesign {
    fn default() -> Self {
        Self {
            altitude_km: None,
            ecc: None,
            inc_deg: None,
            ltan_h: default_ltan_h(),
            date: None,
            ta_deg: default_ta_deg(),
        }
    }
}

impl SunSyncDesign {
    /// Number of known (defined) shape parameters
    pub fn known_parameters(&self) -> usize {
        [self.altitude_km, self.ecc, self.inc_deg]
            .iter()
            .filter(|param| param.is_some())
            .count()
    }

    /// Copies and returns [SunSyncDesign] with desired altitude (km)
    pub fn with_altitude_km(&self, altitude_km: f64) -> Self {
        let mut s = *self;
        s.altitude_km = Some(altitude_km);
        s
    }

    /// Copies and returns [SunSyncDesign] with desired eccentricity
    pub fn with_eccentricity(&self, ecc: f64) -> Self {
        let mut s = *self;
        s.ecc = Some(ecc);
        s
    }

    /// Copies and returns [SunSyncDesign] with desired inclination (degrees)
    pub fn with_inclination_deg(&self, inc_deg: f64) -> Self {
        let mut s = *self;
        s.inc_deg = Some(inc_deg);
        s
    }

    /// Copies and returns [SunSyncDesign] with desired LTAN (hours)
    pub fn with_ltan_h(&self, ltan_h: f64) -> Self {
        let mut s = *self;
        s.ltan_h = ltan_h;
        s
    }

    /// Copies and returns [SunSyncDesign] with desired reference date
    pub fn with_date(&self, date: Epoch) -> Self {
        let mut s = *self;
        s.date = Some(date);
        s
    }

    /// Copies and returns [SunSyncDesign] with desired true anomaly offset (degrees)
    pub fn with_true_anomaly_deg(&self, ta_deg: f64) -> Self {
        let mut s = *self;
        s.ta_deg = ta_deg;
        s
    }
}
