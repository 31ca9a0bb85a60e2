use log::debug;

use crate::{
    predictor::CUSTOM_SATELLITE_ID,
    prelude::{Error, FrameConversion, GravityModel, J2Predictor, OrbitalElements, SunSyncDesign},
};

/// [SunSyncPlane] generates Sun-synchronous [J2Predictor]s sharing the same
/// orbital plane and reference epoch, uniformly spaced in true anomaly.
///
/// Predictors are built on demand, each iteration returns a new instance.
/// Clone the [SunSyncPlane] to iterate the same constellation several times.
#[derive(Debug, Clone)]
pub struct SunSyncPlane {
    /// Shared plane, at null true anomaly
    elements: OrbitalElements,
    /// [GravityModel] in use
    gravity: GravityModel,
    /// Total number of satellites
    count: usize,
    /// Next satellite to generate
    next: usize,
}

impl SunSyncPlane {
    /// Returns the shared [OrbitalElements] of this plane (first satellite)
    pub fn plane(&self) -> &OrbitalElements {
        &self.elements
    }
}

impl Iterator for SunSyncPlane {
    type Item = J2Predictor;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }

        let ta_deg = 360.0 * self.next as f64 / self.count as f64;
        self.next += 1;

        let predictor = J2Predictor {
            satellite_id: CUSTOM_SATELLITE_ID.to_string(),
            elements: self.elements.with_true_anomaly_deg(ta_deg),
            gravity: self.gravity,
        };

        Some(predictor)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SunSyncPlane {}

/// Designs a constellation of `count` Sun-synchronous satellites sharing the
/// same plane, uniformly spaced in true anomaly over [0, 360°), the first one
/// at 0°. The true anomaly offset of the [SunSyncDesign] is disregarded.
///
/// The plane is solved once, so invalid designs are reported here
/// (see [J2Predictor::sun_synchronous]) and the returned [SunSyncPlane]
/// cannot fail.
pub fn sun_sync_plane_constellation(
    count: usize,
    design: &SunSyncDesign,
    gravity: GravityModel,
    frames: &dyn FrameConversion,
) -> Result<SunSyncPlane, Error> {
    let first = J2Predictor::sun_synchronous(&design.with_true_anomaly_deg(0.0), gravity, frames)?;

    debug!(
        "{} - sun-synchronous plane of {} satellites",
        first.elements.epoch(),
        count
    );

    Ok(SunSyncPlane {
        elements: first.elements,
        gravity,
        count,
        next: 0,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::prelude::{Epoch, MeanSiderealFrame};
    use std::str::FromStr;

    #[test]
    fn empty_constellation() {
        let design = SunSyncDesign::default()
            .with_altitude_km(600.0)
            .with_eccentricity(0.0)
            .with_date(Epoch::from_str("2024-01-01T00:00:00 UTC").unwrap());

        let frames = MeanSiderealFrame::default();
        let mut plane =
            sun_sync_plane_constellation(0, &design, GravityModel::wgs84(), &frames).unwrap();

        assert_eq!(plane.len(), 0);
        assert!(plane.next().is_none());
    }

    #[test]
    fn invalid_design_is_reported_upfront() {
        let design = SunSyncDesign::default().with_altitude_km(600.0);
        let frames = MeanSiderealFrame::default();
        let plane = sun_sync_plane_constellation(3, &design, GravityModel::wgs84(), &frames);
        assert_eq!(plane.err(), Some(Error::InvalidSunSyncParameters(1)));
    }
}
