use super::*;
use crate::{SpringSpec, TimingSpec, Transition};
use panimate_testing::{CompletionProbe, FrameDriver};
use std::cell::{Cell, RefCell};

#[test]
fn observed_value_includes_offset() {
    let clock = FrameClock::new();
    let value = AnimatedValue::new(&clock, 10.0);

    value.set_offset(5.0);
    assert_eq!(value.get(), 15.0);
    assert_eq!(value.value(), 10.0);
    assert_eq!(value.offset(), 5.0);
}

#[test]
fn extract_and_flatten_preserve_observed_value() {
    let clock = FrameClock::new();
    let value = AnimatedValue::new(&clock, 40.0);
    value.set_offset(2.0);

    value.extract_offset();
    assert_eq!((value.value(), value.offset()), (0.0, 42.0));
    assert_eq!(value.get(), 42.0);

    value.set_value(8.0);
    value.flatten_offset();
    assert_eq!((value.value(), value.offset()), (50.0, 0.0));
}

#[test]
fn listeners_see_writes_until_removed() {
    let clock = FrameClock::new();
    let value = AnimatedValue::new(&clock, 0.0);
    let seen = Rc::new(RefCell::new(Vec::new()));

    let id = {
        let seen = Rc::clone(&seen);
        value.add_listener(move |observed| seen.borrow_mut().push(observed))
    };
    value.set_value(1.0);
    value.set_offset(2.0);
    assert!(value.remove_listener(id));
    assert!(!value.remove_listener(id));
    value.set_value(5.0);

    assert_eq!(seen.borrow().as_slice(), &[1.0, 3.0]);
}

#[test]
fn listener_may_read_the_value_it_observes() {
    let clock = FrameClock::new();
    let value = AnimatedValue::new(&clock, 0.0);
    let reads = Rc::new(Cell::new(0.0));
    {
        let reads = Rc::clone(&reads);
        let observed = value.clone();
        value.add_listener(move |_| reads.set(observed.get()));
    }
    value.set_value(7.0);
    assert_eq!(reads.get(), 7.0);
}

#[test]
fn animation_notifies_listeners_every_frame() {
    let mut frames = FrameDriver::new().with_interval_millis(10);
    let value = AnimatedValue::new(frames.clock(), 0.0);
    let updates = Rc::new(Cell::new(0));
    {
        let updates = Rc::clone(&updates);
        value.add_listener(move |_| updates.set(updates.get() + 1));
    }

    Transition::timing(&value, 100.0, TimingSpec::linear(50)).start_detached();
    assert!(value.is_animating());
    assert_eq!(frames.run_until_idle(20), Some(6));

    assert_eq!(value.get(), 100.0);
    assert_eq!(updates.get(), 6);
    assert!(!value.is_animating());
}

#[test]
fn set_value_preempts_running_animation() {
    let mut frames = FrameDriver::new().with_interval_millis(10);
    let value = AnimatedValue::new(frames.clock(), 0.0);
    let probe = CompletionProbe::new(frames.clock());

    Transition::timing(&value, 100.0, TimingSpec::linear(100)).start(probe.callback());
    frames.frame();
    frames.advance_frame();
    value.set_value(-5.0);

    assert!(!value.is_animating());
    frames.advance_by_millis(200);
    assert_eq!(value.get(), -5.0);
    assert!(!probe.fired());
}

#[test]
fn stop_animation_freezes_in_place() {
    let mut frames = FrameDriver::new().with_interval_millis(10);
    let value = AnimatedValue::new(frames.clock(), 0.0);
    Transition::timing(&value, 100.0, TimingSpec::linear(100)).start_detached();

    frames.frame();
    frames.advance_by_millis(30);
    let stopped = value.stop_animation();

    assert!((stopped - 30.0).abs() < 1e-3);
    frames.advance_by_millis(100);
    assert_eq!(value.get(), stopped);
}

#[test]
fn animation_targets_underlying_value_not_offset() {
    let mut frames = FrameDriver::new().with_interval_millis(10);
    let value = AnimatedValue::new(frames.clock(), 0.0);
    value.set_offset(20.0);

    Transition::timing(&value, 0.0, TimingSpec::linear(10)).start_detached();
    value.set_value(50.0);
    Transition::timing(&value, 0.0, TimingSpec::linear(10)).start_detached();
    frames.run_until_idle(10);

    assert_eq!(value.value(), 0.0);
    assert_eq!(value.get(), 20.0);
}

#[test]
fn preempting_spring_carries_velocity() {
    let mut frames = FrameDriver::new().with_interval_millis(10);
    let value = AnimatedValue::new(frames.clock(), 0.0);
    let spec = SpringSpec::from_damping_ratio(1.0, 200.0);

    Transition::spring(&value, 100.0, spec).start_detached();
    frames.frame();
    frames.advance_by_millis(50);
    let before = value.get();

    // Retargeting to the current position keeps moving forward for a while.
    Transition::spring(&value, before, spec).start_detached();
    frames.advance_frame();
    assert_eq!(value.get(), before);
    frames.advance_frame();
    assert!(value.get() > before);
}

#[test]
fn xy_listener_receives_both_axes() {
    let clock = FrameClock::new();
    let position = AnimatedValueXY::new(&clock, Offset::new(1.0, 2.0));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let id = {
        let seen = Rc::clone(&seen);
        position.add_listener(move |offset| seen.borrow_mut().push(offset))
    };

    position.set_value(Offset::new(3.0, 4.0));
    assert_eq!(
        seen.borrow().as_slice(),
        &[Offset::new(3.0, 2.0), Offset::new(3.0, 4.0)]
    );
    assert!(position.remove_listener(id));
}

#[test]
fn xy_offsets_apply_per_axis() {
    let clock = FrameClock::new();
    let position = AnimatedValueXY::new(&clock, Offset::new(10.0, -10.0));

    position.extract_offset();
    position.set_value(Offset::new(5.0, 5.0));
    assert_eq!(position.get(), Offset::new(15.0, -5.0));
    assert_eq!(position.offset(), Offset::new(10.0, -10.0));

    position.flatten_offset();
    assert_eq!(position.value(), Offset::new(15.0, -5.0));
    assert_eq!(position.offset(), Offset::ZERO);
}
