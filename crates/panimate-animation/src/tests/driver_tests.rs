use super::*;
use crate::{ConfigError, Easing};

const MS: u64 = NANOS_PER_MILLI;

fn run_to_end(driver: &mut Driver, interval_ms: u64, max_frames: u64) -> (u64, Vec<f32>) {
    let mut samples = Vec::new();
    for frame in 0..=max_frames {
        let step = driver.step(frame * interval_ms * MS);
        samples.push(step.value);
        if step.finished {
            return (frame * interval_ms, samples);
        }
    }
    panic!("driver did not finish within {max_frames} frames");
}

#[test]
fn linear_timing_tracks_elapsed_fraction() {
    let mut driver = Driver::new(TimingSpec::linear(100).into(), 0.0, 200.0, None, 0.0);

    assert_eq!(driver.step(5 * MS), Step::running(0.0));
    assert_eq!(driver.step(55 * MS).value, 100.0);
    assert_eq!(driver.step(105 * MS), Step::finished(200.0));
}

#[test]
fn explicit_start_anchors_elapsed_time() {
    let mut driver = Driver::new(TimingSpec::linear(100).into(), 0.0, 10.0, Some(0), 0.0);
    assert_eq!(driver.step(50 * MS).value, 5.0);
}

#[test]
fn timing_holds_start_value_during_delay() {
    let spec = TimingSpec::linear(100).with_delay(50);
    let mut driver = Driver::new(spec.into(), 1.0, 0.0, Some(0), 0.0);

    assert_eq!(driver.step(40 * MS), Step::running(1.0));
    assert_eq!(driver.step(100 * MS).value, 0.5);
    assert!(driver.step(150 * MS).finished);
}

#[test]
fn zero_duration_finishes_on_first_frame() {
    let mut driver = Driver::new(TimingSpec::linear(0).into(), 3.0, 7.0, None, 0.0);
    assert_eq!(driver.step(0), Step::finished(7.0));
}

#[test]
fn eased_timing_ends_exactly_on_target() {
    let spec = TimingSpec::tween(300, Easing::EaseInOut);
    let mut driver = Driver::new(spec.into(), -50.0, 50.0, None, 0.0);

    let (_, samples) = run_to_end(&mut driver, 16, 100);
    assert_eq!(samples.last().copied(), Some(50.0));
    assert!(samples.windows(2).all(|pair| pair[1] >= pair[0]));
}

#[test]
fn spring_settles_and_snaps_to_target() {
    let mut driver = Driver::new(SpringSpec::default().into(), 0.0, 100.0, None, 0.0);

    let (settled_at, samples) = run_to_end(&mut driver, 16, 2_000);
    assert_eq!(samples.last().copied(), Some(100.0));
    assert!(settled_at > 0);
    assert_eq!(driver.velocity(), 0.0);
}

#[test]
fn underdamped_spring_overshoots() {
    let spec = SpringSpec::from_damping_ratio(0.3, 200.0);
    let mut driver = Driver::new(spec.into(), 0.0, 100.0, None, 0.0);

    let (_, samples) = run_to_end(&mut driver, 16, 2_000);
    assert!(samples.iter().any(|value| *value > 100.0));
}

#[test]
fn overshoot_clamping_finishes_at_crossing() {
    let spec = SpringSpec::from_damping_ratio(0.3, 200.0).with_overshoot_clamping(true);
    let mut driver = Driver::new(spec.into(), 0.0, 100.0, None, 0.0);

    let (_, samples) = run_to_end(&mut driver, 16, 2_000);
    assert!(samples.iter().all(|value| *value <= 100.0));
    assert_eq!(samples.last().copied(), Some(100.0));
}

#[test]
fn coarse_rest_thresholds_settle_early() {
    let fine = SpringSpec::from_tension_friction(5.0, 7.0);
    let coarse = fine.with_rest_thresholds(100.0, 100.0);

    let (fine_end, _) = run_to_end(&mut Driver::new(fine.into(), 0.0, 500.0, None, 0.0), 16, 5_000);
    let (coarse_end, _) =
        run_to_end(&mut Driver::new(coarse.into(), 0.0, 500.0, None, 0.0), 16, 5_000);
    assert!(coarse_end < fine_end);
}

#[test]
fn spring_inherits_carried_velocity() {
    let spec = SpringSpec::from_damping_ratio(1.0, 100.0);
    let mut resting = Driver::new(spec.into(), 0.0, 0.0, Some(0), 0.0);
    let mut pushed = Driver::new(spec.into(), 0.0, 0.0, Some(0), 500.0);

    assert!(resting.step(16 * MS).finished);
    assert!(pushed.step(16 * MS).value > 0.0);
    assert!(pushed.velocity() != 0.0);
}

#[test]
fn explicit_initial_velocity_wins_over_carried() {
    let spec = SpringSpec::from_damping_ratio(1.0, 100.0).with_initial_velocity(-500.0);
    let mut driver = Driver::new(spec.into(), 0.0, 0.0, Some(0), 500.0);
    assert!(driver.step(16 * MS).value < 0.0);
}

#[test]
fn invalid_spring_snaps_to_target() {
    let spec = SpringSpec::from_stiffness_damping(0.0, 10.0, 1.0);
    let mut driver = Driver::new(spec.into(), 0.0, 42.0, None, 0.0);
    assert_eq!(driver.step(0), Step::finished(42.0));
}

#[test]
fn undamped_spring_is_rejected_and_snaps() {
    let spec = SpringSpec::from_stiffness_damping(100.0, 0.0, 1.0);
    assert_eq!(
        spec.validate(),
        Err(ConfigError::InvalidSpring {
            reason: "damping must be positive",
        })
    );

    let mut driver = Driver::new(spec.into(), 0.0, 100.0, None, 0.0);
    assert_eq!(driver.step(0), Step::finished(100.0));
}

#[test]
fn tension_and_friction_convert_to_stiffness_and_damping() {
    let spec = SpringSpec::default();
    assert!((spec.stiffness - 230.2).abs() < 1e-3);
    assert!((spec.damping - 22.0).abs() < 1e-3);
    assert_eq!(spec.mass, 1.0);
    assert!(spec.damping_ratio() < 1.0);
}
