use crate::{
    prelude::{
        sun_sync_plane_constellation, GravityModel, MeanSiderealFrame, Predictor, SunSyncDesign,
    },
    tests::{init_logger, reference_epoch},
};

use itertools::Itertools;

#[test]
fn four_satellites_noon_plane() {
    init_logger();

    let design = SunSyncDesign::default()
        .with_altitude_km(600.0)
        .with_eccentricity(0.0)
        .with_ltan_h(12.0)
        .with_date(reference_epoch())
        .with_true_anomaly_deg(45.0);

    let frames = MeanSiderealFrame::default();
    let plane = sun_sync_plane_constellation(4, &design, GravityModel::wgs84(), &frames).unwrap();

    assert_eq!(plane.len(), 4);

    let reference = *plane.plane();
    let predictors = plane.collect::<Vec<_>>();
    assert_eq!(predictors.len(), 4);

    for (predictor, ta_deg) in predictors.iter().zip([0.0, 90.0, 180.0, 270.0]) {
        let elements = predictor.elements();
        assert_eq!(elements.ta_deg(), ta_deg);
        assert_eq!(elements.sma_km(), reference.sma_km());
        assert_eq!(elements.ecc(), reference.ecc());
        assert_eq!(elements.inc_deg(), reference.inc_deg());
        assert_eq!(elements.raan_deg(), reference.raan_deg());
        assert_eq!(elements.argp_deg(), 0.0);
        assert_eq!(elements.epoch(), reference.epoch());
        assert_eq!(predictor.satellite_id(), "<custom>");
    }

    assert!((reference.inc_deg() - 97.787).abs() < 1.0E-2);

    // satellites are evenly spaced along the circular orbit
    let t = reference.epoch();
    let positions = predictors
        .iter()
        .map(|predictor| predictor.position(t).unwrap())
        .collect::<Vec<_>>();

    let chord_km = reference.sma_km() * 2.0_f64.sqrt();
    for (prev, next) in positions.iter().circular_tuple_windows() {
        assert!(((next - prev).norm() - chord_km).abs() < 1.0E-6);
    }
}

#[test]
fn plane_can_be_consumed_twice() {
    init_logger();

    let design = SunSyncDesign::default()
        .with_altitude_km(800.0)
        .with_eccentricity(0.001)
        .with_ltan_h(6.0)
        .with_date(reference_epoch());

    let frames = MeanSiderealFrame::default();
    let plane = sun_sync_plane_constellation(7, &design, GravityModel::wgs84(), &frames).unwrap();

    let first = plane.clone().collect::<Vec<_>>();
    let second = plane.collect::<Vec<_>>();

    assert_eq!(first.len(), 7);
    assert_eq!(first, second);

    for (prev, next) in first.iter().tuple_windows() {
        let spacing = next.elements().ta_deg() - prev.elements().ta_deg();
        assert!((spacing - 360.0 / 7.0).abs() < 1.0E-9);
    }
}

#[test]
fn partially_consumed_plane() {
    let design = SunSyncDesign::default()
        .with_altitude_km(600.0)
        .with_eccentricity(0.0)
        .with_date(reference_epoch());

    let frames = MeanSiderealFrame::default();
    let mut plane =
        sun_sync_plane_constellation(3, &design, GravityModel::wgs84(), &frames).unwrap();

    assert!(plane.next().is_some());
    assert_eq!(plane.len(), 2);

    let remaining = plane.map(|predictor| predictor.elements().ta_deg());
    assert_eq!(remaining.collect::<Vec<_>>(), vec![120.0, 240.0]);
}
