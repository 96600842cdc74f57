use super::{
    CalibrationState, GlideEngine, GlideError, GlideReadout, GlideResult, GravitySample,
    Loadable, OrientationRegime, ReadoutFormat,
    common::math::{MAX_PLACES, format_rounded, round_to_places},
};
use rand::{Rng, rng};
use strum::IntoEnumIterator;

const EPS: f64 = 1e-9;

/// Sample whose inclination (`180° - tilt`) equals `inclination_deg`.
fn sample_at_inclination(inclination_deg: f64) -> GravitySample {
    GravitySample::from_tilt_deg(180.0 - inclination_deg)
}

#[test]
fn test_straight_down_is_flat() {
    let reading = GlideEngine::evaluate(&GravitySample::new(0.0, 0.0, -1.0)).unwrap();
    assert!((reading.tilt_deg() - 180.0).abs() < EPS);
    assert!(reading.inclination_deg().abs() < EPS);
    assert_eq!(reading.regime(), None);
    assert_eq!(reading.angle_deg(), None);
    assert_eq!(
        GlideEngine::compute(&GravitySample::new(0.0, 0.0, -1.0)),
        (None, Loadable::Loaded(0.0))
    );
}

#[test]
fn test_straight_up_is_flat() {
    let reading = GlideEngine::evaluate(&GravitySample::new(0.0, 0.0, 1.0)).unwrap();
    assert!(reading.tilt_deg().abs() < EPS);
    assert!((reading.inclination_deg() - 180.0).abs() < EPS);
    assert!(reading.is_flat());
    assert_eq!(reading.glide_ratio(), GlideEngine::FLAT_GLIDE_RATIO);
}

#[test]
fn test_horizontal_vector_is_flat() {
    // z == 0 gives a tilt of exactly 90°
    let (regime, glide) = GlideEngine::compute(&GravitySample::new(1.0, 0.0, 0.0));
    assert_eq!(regime, None);
    assert_eq!(glide, Loadable::Loaded(0.0));
}

#[test]
fn test_takeoff_at_45_degrees() {
    let sample = GravitySample::from_tilt_deg(135.0);
    let reading = GlideEngine::evaluate(&sample).unwrap();
    assert_eq!(reading.regime(), Some(OrientationRegime::FromTakeoff));
    assert!((reading.angle_deg().unwrap() - 45.0).abs() < 1e-6);
    assert!((reading.glide_ratio() - 1.0).abs() < 1e-6);
}

#[test]
fn test_landing_at_135_degrees() {
    let sample = sample_at_inclination(135.0);
    let (regime, glide) = GlideEngine::compute(&sample);
    assert_eq!(regime, Some(OrientationRegime::FromLanding));
    let ratio = *glide.value().expect("expected a loaded ratio");
    assert!(glide.is_loaded());
    assert!((ratio - 1.0).abs() < 1e-6);
}

#[test]
fn test_shallow_angles_give_large_ratios() {
    // inclination 84° -> working angle 6° -> cot(6°) ≈ 9.514
    let reading = GlideEngine::evaluate(&sample_at_inclination(84.0)).unwrap();
    assert_eq!(reading.regime(), Some(OrientationRegime::FromTakeoff));
    assert!((reading.glide_ratio() - 9.514_364_454).abs() < 1e-6);

    // inclination 100° -> working angle 10° -> cot(10°) ≈ 5.671
    let reading = GlideEngine::evaluate(&sample_at_inclination(100.0)).unwrap();
    assert_eq!(reading.regime(), Some(OrientationRegime::FromLanding));
    assert!((reading.glide_ratio() - 5.671_281_819).abs() < 1e-6);
}

#[test]
fn test_magnitude_does_not_matter() {
    let unit = GravitySample::from_tilt_deg(120.0);
    let scaled = GravitySample::new(unit.x() * 9.81, unit.y() * 9.81, unit.z() * 9.81);
    let a = GlideEngine::evaluate(&unit).unwrap();
    let b = GlideEngine::evaluate(&scaled).unwrap();
    assert_eq!(a.regime(), b.regime());
    assert!((a.glide_ratio() - b.glide_ratio()).abs() < 1e-9);
}

#[test]
fn test_zero_vector_is_degenerate() {
    let zero = GravitySample::new(0.0, 0.0, 0.0);
    assert!(zero.is_degenerate());
    assert_eq!(GlideEngine::evaluate(&zero), Err(GlideError::DegenerateSample));
    let (regime, glide) = GlideEngine::compute(&zero);
    assert_eq!(regime, None);
    assert_eq!(glide, Loadable::Failed(GlideError::DegenerateSample.to_string()));
}

#[test]
fn test_non_finite_vector_is_degenerate() {
    for s in [
        GravitySample::new(f64::NAN, 0.0, -1.0),
        GravitySample::new(0.0, f64::INFINITY, 0.0),
        GravitySample::new(0.0, 0.0, f64::NEG_INFINITY),
    ] {
        assert_eq!(GlideEngine::evaluate(&s), Err(GlideError::DegenerateSample), "{s:?}");
    }
}

#[test]
fn test_classify_boundaries() {
    for boundary in [0.0, 90.0, 180.0, -1.0, 181.0] {
        assert_eq!(GlideEngine::classify(boundary), (None, None), "{boundary}");
    }
    assert_eq!(
        GlideEngine::classify(30.0),
        (Some(OrientationRegime::FromTakeoff), Some(60.0))
    );
    assert_eq!(
        GlideEngine::classify(150.0),
        (Some(OrientationRegime::FromLanding), Some(60.0))
    );
}

#[test]
fn test_extreme_magnitudes_match_unit_direction() {
    let cases = [
        (GravitySample::new(0.0, 0.0, 1e-200), GravitySample::new(0.0, 0.0, 1.0)),
        (GravitySample::new(0.0, 1e-200, 1e-200), GravitySample::new(0.0, 1.0, 1.0)),
        (GravitySample::new(0.0, 5e-324, 5e-324), GravitySample::new(0.0, 1.0, 1.0)),
        (GravitySample::new(0.0, 1e200, 1e200), GravitySample::new(0.0, 1.0, 1.0)),
        (GravitySample::new(f64::MAX, f64::MAX, f64::MAX), GravitySample::new(1.0, 1.0, 1.0)),
        (GravitySample::new(-1e300, 0.0, -1e300), GravitySample::new(-1.0, 0.0, -1.0)),
    ];
    for (extreme, unit) in cases {
        assert!(!extreme.is_degenerate(), "{extreme:?}");
        let (regime, glide) = GlideEngine::compute(&extreme);
        let (unit_regime, unit_glide) = GlideEngine::compute(&unit);
        assert_eq!(regime, unit_regime, "{extreme:?}");
        let ratio = *glide.value().expect("extreme sample must load");
        assert!(glide.is_loaded(), "{extreme:?} -> {glide:?}");
        assert!((ratio - unit_glide.value().unwrap()).abs() < 1e-9, "{extreme:?} -> {ratio}");
    }

    let (regime, glide) = GlideEngine::compute(&GravitySample::new(0.0, 1e200, 1e200));
    assert_eq!(regime, Some(OrientationRegime::FromLanding));
    assert!((glide.value().unwrap() - 1.0).abs() < 1e-9);
    assert_eq!(
        GlideEngine::compute(&GravitySample::new(0.0, 0.0, 1e-200)),
        (None, Loadable::Loaded(0.0))
    );
}

#[test]
fn test_normalized_has_unit_length() {
    for s in [
        GravitySample::new(3.0, 4.0, 12.0),
        GravitySample::new(1e-310, 0.0, -1e-310),
        GravitySample::new(1e300, -1e300, 1e300),
    ] {
        let (x, y, z) = s.normalized().unwrap();
        assert!(((x * x + y * y + z * z).sqrt() - 1.0).abs() < 1e-12, "{s:?}");
    }
    assert_eq!(GravitySample::new(0.0, 0.0, 0.0).normalized(), None);
    assert!((GravitySample::new(3.0, 4.0, 12.0).magnitude() - 13.0).abs() < EPS);
}

#[test]
fn test_random_nonzero_vectors_always_load() {
    let mut rng = rng();
    for _ in 0..20_000 {
        let scale = 10f64.powi(rng.random_range(-300..300));
        let sample = GravitySample::new(
            rng.random_range(-1.0..=1.0) * scale,
            rng.random_range(-1.0..=1.0) * scale,
            rng.random_range(-1.0..=1.0) * scale,
        );
        if sample.x() == 0.0 && sample.y() == 0.0 && sample.z() == 0.0 {
            continue;
        }
        assert!(!sample.is_degenerate(), "{sample:?}");
        let (regime, glide) = GlideEngine::compute(&sample);
        let Loadable::Loaded(ratio) = glide else {
            panic!("nonzero sample {sample:?} did not load: {glide:?}");
        };
        assert!(ratio.is_finite(), "{sample:?}");
        assert!(ratio >= 0.0, "{sample:?} -> {ratio}");
        if regime.is_none() {
            assert_eq!(ratio, 0.0, "{sample:?}");
        }
    }
}

#[test]
#[allow(clippy::approx_constant)]
fn test_round_to_places() {
    assert!((round_to_places(3.14159, 1) - 3.1).abs() < EPS);
    assert!((round_to_places(3.15, 0) - 3.0).abs() < EPS);
    assert!((round_to_places(2.5, 0) - 3.0).abs() < EPS);
    assert!((round_to_places(-2.5, 0) + 3.0).abs() < EPS);
}

#[test]
fn test_round_half_away_from_zero_both_directions() {
    assert!((round_to_places(0.05, 1) - 0.1).abs() < EPS);
    assert!((round_to_places(-0.05, 1) + 0.1).abs() < EPS);
    assert!(round_to_places(0.04, 1).abs() < EPS);
    assert!(round_to_places(-0.04, 1).abs() < EPS);
}

#[test]
#[allow(clippy::approx_constant)]
fn test_format_rounded() {
    assert_eq!(format_rounded(3.14159, 1), "3.1");
    assert_eq!(format_rounded(-0.04, 1), "0.0");
    assert_eq!(format_rounded(12.0, 2), "12.00");
}

#[test]
fn test_rounding_caps_places() {
    let value = 1.234_567_890_123_456_7;
    assert!(round_to_places(value, 400).is_finite());
    assert_eq!(round_to_places(value, 400), round_to_places(value, MAX_PLACES));
    assert!((round_to_places(1e300, 15) - 1e300).abs() < f64::EPSILON * 1e300);
    assert_eq!(format_rounded(0.5, u32::MAX).len(), 2 + MAX_PLACES as usize);
}

#[test]
fn test_loadable_accessors() {
    let loading: GlideResult = Loadable::Loading(Some(4.2));
    assert_eq!(loading.value(), Some(&4.2));
    assert!(loading.is_loading());
    let failed: GlideResult = Loadable::Failed("boom".to_string());
    assert_eq!(failed.error(), Some("boom"));
    assert_eq!(failed.value(), None);
    assert!(GlideResult::default().is_not_requested());
    let res: Result<f64, GlideError> = Err(GlideError::DegenerateSample);
    assert!(Loadable::from_result(res).is_failed());
}

#[test]
fn test_readout_for_each_regime() {
    let calibration: CalibrationState = Loadable::Loaded("Calibration done.".to_string());
    let glide: GlideResult = Loadable::Loaded(7.26);
    for regime in OrientationRegime::iter() {
        let readout = GlideReadout::new(&calibration, &glide, Some(regime), ReadoutFormat::default());
        assert_eq!(readout.regime_label(), regime.to_string());
        assert_eq!(readout.icon_name(), regime.icon_name());
        assert_eq!(readout.ratio_text(), "7.3");
        assert_eq!(readout.calibration_text(), "Calibration done.");
    }
}

#[test]
fn test_readout_hides_large_ratio() {
    let calibration: CalibrationState = Loadable::Loaded("Calibration done.".to_string());
    let glide: GlideResult = Loadable::Loaded(57.3);
    let readout = GlideReadout::new(
        &calibration,
        &glide,
        Some(OrientationRegime::FromLanding),
        ReadoutFormat::default(),
    );
    assert_eq!(readout.ratio_text(), "");
    assert_eq!(readout.regime_label(), OrientationRegime::FLAT_LABEL);
    assert_eq!(readout.icon_name(), OrientationRegime::FLAT_ICON);
}

#[test]
fn test_readout_shows_error_and_calibration_states() {
    let glide: GlideResult = Loadable::Failed("Sample delivery failed: gyro".to_string());
    let failed: CalibrationState = Loadable::Failed(String::new());
    let readout = GlideReadout::new(&failed, &glide, None, ReadoutFormat::default());
    assert_eq!(readout.ratio_text(), "Sample delivery failed: gyro");
    assert_eq!(readout.calibration_text(), "Unknown issue.");

    let loading: CalibrationState = Loadable::Loading(None);
    let pending: GlideResult = Loadable::Loading(None);
    let readout = GlideReadout::new(&loading, &pending, None, ReadoutFormat::default());
    assert_eq!(readout.calibration_text(), "Loading");
    assert_eq!(readout.ratio_text(), "");
}
