//! Views derived from a value while transitions drive it.

use panimate_animation::prelude::*;
use panimate_core::FrameClock;
use panimate_graphics::{Angle, Rgb};
use panimate_testing::{CompletionProbe, FrameDriver};

fn rotation(source: &AnimatedValue) -> panimate_animation::Interpolated<Angle> {
    source.interpolate(
        Interpolator::new(
            InterpolationConfig::<Angle>::parsed([0.0, 400.0], &["0deg", "180deg"])
                .unwrap()
                .clamp(),
        )
        .unwrap(),
    )
}

#[test]
fn views_track_a_looping_path() {
    let mut frames = FrameDriver::new().with_interval_millis(10);
    let y = AnimatedValue::new(frames.clock(), 0.0);
    let angle = rotation(&y);
    let color = y.interpolate(
        Interpolator::new(
            InterpolationConfig::<Rgb>::parsed([0.0, 400.0], &["rgb(255, 99, 71)", "#47a6ff"])
                .unwrap()
                .clamp(),
        )
        .unwrap(),
    );
    let probe = CompletionProbe::new(frames.clock());

    let path = Transition::looped(
        Transition::sequence([
            Transition::timing(&y, 400.0, TimingSpec::linear(100)),
            Transition::timing(&y, 0.0, TimingSpec::linear(100)),
        ]),
        Some(1),
    );
    path.start(probe.callback());

    frames.frame();
    frames.advance_by_millis(50);
    assert_eq!(angle.get().to_string(), "90deg");

    frames.advance_by_millis(50);
    assert_eq!(angle.get(), Angle::degrees(180.0));
    assert_eq!(color.get(), Rgb::new(71, 166, 255));

    frames.advance_by_millis(100);
    assert_eq!(color.get(), Rgb::TOMATO);
    assert_eq!(probe.fired_at_millis(), Some(200));
}

#[test]
fn drag_offset_feeds_views_without_transitions() {
    let clock = FrameClock::new();
    let y = AnimatedValue::new(&clock, 200.0);
    let angle = rotation(&y);

    y.extract_offset();
    y.set_value(100.0);
    assert_eq!(angle.get().to_string(), "135deg");

    y.set_value(900.0);
    assert_eq!(angle.get(), Angle::degrees(180.0));
}
