use crate::{
    cfg::Error,
    constants::{
        WGS72_EQUATORIAL_RADIUS_KM, WGS72_J2, WGS72_MU_KM3_S2, WGS84_EQUATORIAL_RADIUS_KM,
        WGS84_J2, WGS84_MU_KM3_S2,
    },
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [GravityModel] of the central body, passed explicitly to
/// every propagation and design operation.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GravityModel {
    /// Gravitational parameter μ (km³.s⁻²)
    pub mu_km3_s2: f64,
    /// Equatorial radius (km)
    pub equatorial_radius_km: f64,
    /// J2 zonal harmonic (oblateness)
    pub j2: f64,
}

impl Default for GravityModel {
    fn default() -> Self {
        Self::wgs84()
    }
}

impl GravityModel {
    /// WGS84 [GravityModel], as used by SGP4
    pub fn wgs84() -> Self {
        Self {
            mu_km3_s2: WGS84_MU_KM3_S2,
            equatorial_radius_km: WGS84_EQUATORIAL_RADIUS_KM,
            j2: WGS84_J2,
        }
    }

    /// WGS72 [GravityModel]
    pub fn wgs72() -> Self {
        Self {
            mu_km3_s2: WGS72_MU_KM3_S2,
            equatorial_radius_km: WGS72_EQUATORIAL_RADIUS_KM,
            j2: WGS72_J2,
        }
    }

    /// Secular J2 rate factor 3.n.Re².J2 / p², in rad/s
    pub(crate) fn j2_rate_factor(&self, n_rad_s: f64, p_km: f64) -> f64 {
        3.0 * n_rad_s * self.equatorial_radius_km.powi(2) * self.j2 / p_km.powi(2)
    }
}

impl std::str::FromStr for GravityModel {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let c = s.trim().to_lowercase();
        match c.as_str() {
            "wgs84" => Ok(Self::wgs84()),
            "wgs72" => Ok(Self::wgs72()),
            _ => Err(Error::UnknownGravityModel(c)),
        }
    }
}

impl std::fmt::Display for GravityModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "μ={} km³/s² Re={} km J2={:e}",
            self.mu_km3_s2, self.equatorial_radius_km, self.j2
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn gravity_model_parsing() {
        assert_eq!(GravityModel::from_str("WGS84"), Ok(GravityModel::wgs84()));
        assert_eq!(GravityModel::from_str(" wgs72 "), Ok(GravityModel::wgs72()));
        assert_eq!(GravityModel::default(), GravityModel::wgs84());
        assert_eq!(
            GravityModel::from_str("egm96"),
            Err(Error::UnknownGravityModel("egm96".to_string()))
        );
    }
}
