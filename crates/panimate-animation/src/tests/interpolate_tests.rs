use super::*;
use panimate_core::FrameClock;
use panimate_graphics::{Angle, Rgb};

fn scalar(inputs: &[f32], outputs: &[f32]) -> InterpolationConfig<f32> {
    InterpolationConfig::new(inputs.to_vec(), outputs.to_vec())
}

#[test]
fn angle_midpoint_is_linear() {
    let interpolator = Interpolator::new(
        InterpolationConfig::<Angle>::parsed([-300.0, 300.0], &["-350deg", "360deg"]).unwrap(),
    )
    .unwrap();

    assert_eq!(interpolator.evaluate(0.0).to_string(), "5deg");
    assert_eq!(interpolator.evaluate(-300.0), Angle::degrees(-350.0));
}

#[test]
fn color_at_domain_edge_is_exact() {
    let interpolator = Interpolator::new(
        InterpolationConfig::new(
            [-300.0, 300.0],
            [Rgb::new(255, 99, 71), Rgb::new(71, 166, 255)],
        )
        .clamp(),
    )
    .unwrap();

    assert_eq!(interpolator.evaluate(300.0), Rgb::new(71, 166, 255));
    assert_eq!(interpolator.evaluate(-300.0), Rgb::new(255, 99, 71));
    assert_eq!(interpolator.evaluate(1_000.0), Rgb::new(71, 166, 255));
}

#[test]
fn clamp_saturates_both_sides() {
    let interpolator = Interpolator::new(scalar(&[0.0, 100.0], &[1.0, 0.5]).clamp()).unwrap();

    assert_eq!(interpolator.evaluate(-50.0), 1.0);
    assert_eq!(interpolator.evaluate(500.0), 0.5);
    assert_eq!(interpolator.evaluate(50.0), 0.75);
}

#[test]
fn clamped_output_stays_within_output_bounds() {
    let interpolator =
        Interpolator::new(scalar(&[-250.0, 0.0, 250.0], &[-15.0, 0.0, 15.0]).clamp()).unwrap();

    for step in -40..=40 {
        let output = interpolator.evaluate(step as f32 * 25.0);
        assert!((-15.0..=15.0).contains(&output), "{output} out of bounds");
    }
}

#[test]
fn extend_follows_edge_segment_slope() {
    let interpolator = Interpolator::new(scalar(&[0.0, 10.0, 100.0], &[0.0, 1.0, 10.0])).unwrap();

    assert!((interpolator.evaluate(200.0) - 20.0).abs() < 1e-4);
    assert_eq!(interpolator.evaluate(-10.0), -1.0);
    assert_eq!(interpolator.evaluate(55.0), 5.5);
}

#[test]
fn identity_passes_input_through() {
    let interpolator = Interpolator::new(
        scalar(&[0.0, 100.0], &[0.0, 1.0])
            .extrapolate_left(Extrapolate::Clamp)
            .extrapolate_right(Extrapolate::Identity),
    )
    .unwrap();

    assert_eq!(interpolator.evaluate(-20.0), 0.0);
    assert_eq!(interpolator.evaluate(250.0), 250.0);
}

#[test]
fn identity_clamps_outputs_without_scalar_form() {
    let interpolator = Interpolator::new(
        InterpolationConfig::new([0.0, 1.0], [Rgb::BLACK, Rgb::WHITE])
            .extrapolate(Extrapolate::Identity),
    )
    .unwrap();

    assert_eq!(interpolator.evaluate(5.0), Rgb::WHITE);
    assert_eq!(interpolator.evaluate(-5.0), Rgb::BLACK);
}

#[test]
fn nan_input_returns_first_output_of_segment() {
    let interpolator = Interpolator::new(scalar(&[0.0, 1.0], &[3.0, 4.0])).unwrap();
    assert_eq!(interpolator.evaluate(f32::NAN), 3.0);
}

#[test]
fn easing_applies_inside_segment_only() {
    let interpolator = Interpolator::new(
        scalar(&[0.0, 1.0], &[0.0, 100.0]).easing(Easing::EaseIn),
    )
    .unwrap();

    let eased = interpolator.evaluate(0.5);
    assert!(eased < 50.0, "ease-in should lag behind linear, got {eased}");
    assert_eq!(interpolator.evaluate(2.0), 200.0);
}

#[test]
fn mismatched_ranges_are_rejected() {
    let error = Interpolator::new(scalar(&[0.0, 1.0, 2.0], &[0.0, 1.0])).unwrap_err();
    assert_eq!(
        error,
        ConfigError::RangeLengthMismatch {
            inputs: 3,
            outputs: 2
        }
    );
}

#[test]
fn single_breakpoint_is_rejected() {
    let error = Interpolator::new(scalar(&[0.0], &[1.0])).unwrap_err();
    assert_eq!(error, ConfigError::TooFewBreakpoints { count: 1 });
}

#[test]
fn non_increasing_inputs_are_rejected() {
    let error = Interpolator::new(scalar(&[0.0, 5.0, 5.0], &[0.0, 1.0, 2.0])).unwrap_err();
    assert_eq!(
        error,
        ConfigError::NonMonotonicInput {
            previous: 5.0,
            next: 5.0
        }
    );

    let error = Interpolator::new(scalar(&[0.0, f32::INFINITY], &[0.0, 1.0])).unwrap_err();
    assert!(matches!(error, ConfigError::NonFiniteValue { .. }));
}

#[test]
fn unparseable_outputs_are_rejected() {
    let error = InterpolationConfig::<Angle>::parsed([0.0, 1.0], &["0deg", "sideways"]).unwrap_err();
    assert!(matches!(error, ConfigError::InvalidAngle(_)));

    let error = InterpolationConfig::<Rgb>::parsed([0.0, 1.0], &["#fff", "rgb(1, 2)"]).unwrap_err();
    assert!(matches!(error, ConfigError::InvalidColor(_)));
}

#[test]
fn views_follow_their_source() {
    let clock = FrameClock::new();
    let position = AnimatedValue::new(&clock, 0.0);
    let opacity = position.interpolate(
        Interpolator::new(scalar(&[0.0, 200.0], &[1.0, 0.0]).clamp()).unwrap(),
    );
    let scale = position.interpolate(
        Interpolator::new(scalar(&[0.0, 200.0], &[1.0, 2.0]).clamp()).unwrap(),
    );

    position.set_value(100.0);
    assert_eq!(opacity.get(), 0.5);
    assert_eq!(scale.get(), 1.5);

    position.set_offset(100.0);
    assert_eq!(opacity.get(), 0.0);
    assert_eq!(scale.get(), 2.0);
    assert_eq!(opacity.source().get(), 200.0);
}
