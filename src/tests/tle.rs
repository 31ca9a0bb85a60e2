use crate::{
    prelude::{
        EcefState, Epoch, Error, FrameConversion, GravityModel, J2Predictor, KeplerianPredictor,
        MeanSiderealFrame, OrbitalElements, Predictor, Sgp4Builder, Sgp4Predictor, Tle,
        TleSource, Unit,
    },
    tests::{init_logger, reference_epoch},
};

use std::cell::Cell;

const ISS_LINE1: &str = "1 25544U 98067A   24001.00000000  .00016717  00000-0  30338-3 0  9990";
const ISS_LINE2: &str = "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.49815350 12345";

/// Serves a single satellite and records the requested date
struct MockTleSource {
    requested: Cell<Option<Epoch>>,
}

impl TleSource for MockTleSource {
    fn tle(&self, satellite_id: &str, date: Epoch) -> Result<Tle, Error> {
        self.requested.set(Some(date));
        if satellite_id == "ISS" {
            Ok(Tle::new(ISS_LINE1, ISS_LINE2))
        } else {
            Err(Error::TleSource(format!("unknown satellite {}", satellite_id)))
        }
    }
}

/// SGP4 stand-in: Keplerian truth with both vectors rotated into ECEF
struct MockSgp4 {
    truth: KeplerianPredictor,
}

impl Sgp4Predictor for MockSgp4 {
    fn epoch(&self) -> Epoch {
        self.truth.epoch()
    }

    fn position(&self, epoch: Epoch) -> Result<EcefState, Error> {
        let frames = MeanSiderealFrame::default();
        let sidereal_angle = frames.sidereal_angle(epoch);
        let state = self.truth.propagate(epoch)?;

        Ok(EcefState {
            position_ecef_km: frames.eci_to_ecef(&state.position_km, sidereal_angle),
            velocity_ecef_km_s: frames.eci_to_ecef(&state.velocity_km_s, sidereal_angle),
        })
    }
}

struct MockSgp4Builder {
    truth: OrbitalElements,
}

impl Sgp4Builder for MockSgp4Builder {
    type Predictor = MockSgp4;

    fn build(&self, tle: &Tle, gravity: &GravityModel) -> Result<MockSgp4, Error> {
        if !tle.lines.0.starts_with("1 ") || !tle.lines.1.starts_with("2 ") {
            return Err(Error::Sgp4("malformed tle".to_string()));
        }

        let truth = KeplerianPredictor::new(self.truth, *gravity)?;
        Ok(MockSgp4 { truth })
    }
}

fn truth() -> OrbitalElements {
    OrbitalElements::new(6790.0, 0.0007, 51.64, 247.46, 130.54, 229.0, reference_epoch()).unwrap()
}

#[test]
fn keplerian_from_tle() {
    init_logger();

    let gravity = GravityModel::wgs84();
    let frames = MeanSiderealFrame::default();

    let source = MockTleSource {
        requested: Cell::new(None),
    };
    let sgp4 = MockSgp4Builder { truth: truth() };

    let date = reference_epoch() + 6.0 * Unit::Hour;

    let predictor =
        KeplerianPredictor::from_tle("ISS", &source, &sgp4, &frames, gravity, Some(date)).unwrap();

    assert_eq!(source.requested.get(), Some(date));
    assert_eq!(predictor.satellite_id(), "ISS");
    assert_eq!(predictor.epoch(), reference_epoch());

    let elements = predictor.elements();
    assert!((elements.sma_km() - 6790.0).abs() < 1.0E-6, "a={}", elements.sma_km());
    assert!((elements.ecc() - 0.0007).abs() < 1.0E-9);
    assert!((elements.inc_deg() - 51.64).abs() < 1.0E-8);
    assert!((elements.raan_deg() - 247.46).abs() < 1.0E-8);
    assert!((elements.argp_deg() - 130.54).abs() < 1.0E-5);
    assert!((elements.ta_deg() - 229.0).abs() < 1.0E-5);

    // propagation matches the source
    let reference = KeplerianPredictor::new(truth(), gravity).unwrap();
    let t = reference_epoch() + 90.0 * Unit::Minute;

    let error_km = (predictor.position(t).unwrap() - reference.position(t).unwrap()).norm();
    assert!(error_km < 1.0E-3, "error={}km", error_km);
}

#[test]
fn j2_from_tle() {
    init_logger();

    let gravity = GravityModel::wgs72();
    let frames = MeanSiderealFrame::default();

    let source = MockTleSource {
        requested: Cell::new(None),
    };
    let sgp4 = MockSgp4Builder { truth: truth() };

    let predictor =
        J2Predictor::from_tle("ISS", &source, &sgp4, &frames, gravity, Some(reference_epoch()))
            .unwrap();

    assert_eq!(predictor.satellite_id(), "ISS");
    assert_eq!(predictor.gravity(), &gravity);
    assert!((predictor.elements().inc_deg() - 51.64).abs() < 1.0E-9);

    // observed in ECEF, the satellite is where the source says it is
    let t = reference_epoch();
    let (position_ecef, _) = predictor.position_ecef(t, &frames).unwrap();
    let expected = sgp4
        .build(&Tle::new(ISS_LINE1, ISS_LINE2), &gravity)
        .unwrap()
        .position(t)
        .unwrap();

    assert!((position_ecef - expected.position_ecef_km).norm() < 1.0E-6);

    let sidereal_angle = frames.sidereal_angle(t);
    let eci = frames.ecef_to_eci(&position_ecef, sidereal_angle);
    assert!((eci - predictor.position(t).unwrap()).norm() < 1.0E-6);
}

#[test]
fn tle_source_errors_are_propagated() {
    init_logger();

    let source = MockTleSource {
        requested: Cell::new(None),
    };
    let sgp4 = MockSgp4Builder { truth: truth() };

    let predictor = KeplerianPredictor::from_tle(
        "HUBBLE",
        &source,
        &sgp4,
        &MeanSiderealFrame::default(),
        GravityModel::wgs84(),
        Some(reference_epoch()),
    );

    assert_eq!(
        predictor.err(),
        Some(Error::TleSource("unknown satellite HUBBLE".to_string()))
    );
}

#[test]
fn sgp4_errors_are_propagated() {
    struct CorruptedSource {}

    impl TleSource for CorruptedSource {
        fn tle(&self, _: &str, _: Epoch) -> Result<Tle, Error> {
            Ok(Tle::new("garbage", ISS_LINE2))
        }
    }

    let sgp4 = MockSgp4Builder { truth: truth() };

    let predictor = J2Predictor::from_tle(
        "ISS",
        &CorruptedSource {},
        &sgp4,
        &MeanSiderealFrame::default(),
        GravityModel::wgs84(),
        Some(reference_epoch()),
    );

    assert_eq!(predictor.err(), Some(Error::Sgp4("malformed tle".to_string())));
}

#[test]
fn current_date_is_used_by_default() {
    let source = MockTleSource {
        requested: Cell::new(None),
    };
    let sgp4 = MockSgp4Builder { truth: truth() };

    let before = Epoch::now().unwrap();

    let _ = KeplerianPredictor::from_tle(
        "ISS",
        &source,
        &sgp4,
        &MeanSiderealFrame::default(),
        GravityModel::wgs84(),
        None,
    )
    .unwrap();

    let requested = source.requested.get().unwrap();
    assert!(requested >= before);
    assert!(requested - before < 1.0 * Unit::Minute);
}
