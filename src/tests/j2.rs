use crate::{
    prelude::{
        state_to_elements, GravityModel, J2Predictor, KeplerianPredictor, OrbitalElements,
        Predictor, Unit,
    },
    tests::{init_logger, reference_epoch},
};

use itertools::Itertools;
use std::f64::consts::TAU;

fn angular_distance_deg(lhs: f64, rhs: f64) -> f64 {
    let delta = (lhs - rhs).rem_euclid(360.0);
    delta.min(360.0 - delta)
}

#[test]
fn shape_is_preserved_and_node_drifts_linearly() {
    init_logger();

    let t0 = reference_epoch();
    let gravity = GravityModel::wgs84();

    let elements = OrbitalElements::new(7100.0, 0.05, 51.6, 100.0, 30.0, 0.0, t0).unwrap();
    let predictor = J2Predictor::new(elements, gravity).unwrap();
    let rates = predictor.secular_rates();

    for hours in [1.0, 6.0, 24.0, 72.0] {
        let t = t0 + hours * Unit::Hour;
        let state = predictor.propagate(t).unwrap();

        let osc = state_to_elements(gravity.mu_km3_s2, &state.position_km, &state.velocity_km_s);

        assert!((osc.sma_km() - 7100.0).abs() < 1.0E-6, "a={}", osc.sma_km());
        assert!((osc.ecc - 0.05).abs() < 1.0E-9, "e={}", osc.ecc);
        assert!((osc.inc_rad.to_degrees() - 51.6).abs() < 1.0E-9);

        let dt_s = hours * 3600.0;
        let expected_raan = (100.0_f64.to_radians() + rates.raan_rad_s * dt_s).rem_euclid(TAU);
        let delta = (osc.raan_rad - expected_raan).rem_euclid(TAU);
        assert!(delta.min(TAU - delta) < 1.0E-9, "raan={}", osc.raan_rad);

        let expected_argp = (30.0_f64.to_radians() + rates.argp_rad_s * dt_s).rem_euclid(TAU);
        let delta = (osc.argp_rad - expected_argp).rem_euclid(TAU);
        assert!(delta.min(TAU - delta) < 1.0E-7, "argp={}", osc.argp_rad);
    }
}

#[test]
fn daily_node_drift_is_constant() {
    init_logger();

    let t0 = reference_epoch();
    let gravity = GravityModel::wgs84();

    let elements = OrbitalElements::new(6778.0, 0.0005, 51.6, 100.0, 0.0, 0.0, t0).unwrap();
    let predictor = J2Predictor::new(elements, gravity).unwrap();

    let raan_deg = (0..10)
        .map(|day| {
            let t = t0 + day as f64 * Unit::Day;
            predictor.elements_at(t).unwrap().raan_deg()
        })
        .collect::<Vec<_>>();

    let daily_drifts = raan_deg
        .iter()
        .tuple_windows()
        .map(|(prev, next)| next - prev)
        .collect::<Vec<_>>();

    let expected = predictor.secular_rates().raan_rad_s.to_degrees() * 86400.0;

    for drift in daily_drifts {
        assert!((drift - expected).abs() < 1.0E-9, "drift={}", drift);
    }
}

#[test]
fn j2_differs_from_keplerian_over_time() {
    init_logger();

    let t0 = reference_epoch();
    let gravity = GravityModel::wgs84();

    let elements = OrbitalElements::new(7000.0, 0.001, 45.0, 0.0, 0.0, 0.0, t0).unwrap();
    let keplerian = KeplerianPredictor::new(elements, gravity).unwrap();
    let j2 = J2Predictor::new(elements, gravity).unwrap();

    let t = t0 + 1.0 * Unit::Day;
    let kepler_state = keplerian.propagate(t).unwrap();
    let j2_state = j2.propagate(t).unwrap();

    // same orbit size, different geometry
    assert!((kepler_state.radius_km() - j2_state.radius_km()).abs() < 20.0);
    assert!((kepler_state.position_km - j2_state.position_km).norm() > 10.0);

    let kepler_elements = keplerian.elements_at(t).unwrap();
    let j2_elements = j2.elements_at(t).unwrap();
    assert_eq!(kepler_elements.raan_deg(), 0.0);
    assert!(angular_distance_deg(j2_elements.raan_deg(), 0.0) > 1.0);
}
