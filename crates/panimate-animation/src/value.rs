//! Tracked values driven by gestures and transitions.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use panimate_core::{FrameCallbackRegistration, FrameClock, ListenerId, ListenerRegistry};
use panimate_graphics::Offset;

use crate::driver::Driver;
use crate::{Interpolated, Interpolator, Lerp, MotionProfile};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct AnimationId(u64);

/// How a single run ended. Only `Finished` ever reaches user continuations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum EndState {
    Finished,
    Preempted,
}

pub(crate) type EndCallback = Box<dyn FnOnce(EndState)>;

/// A scalar driven by gestures or transitions.
///
/// The observed value is `value + offset`. The offset lets a drag resume from
/// where the previous one left off: the tracker moves the accumulated
/// position into the offset when a gesture begins and folds it back when it
/// ends.
///
/// At most one transition drives a value at a time. Starting another one, or
/// writing the value directly, preempts the running transition where it
/// stands and its continuation never runs.
#[derive(Clone)]
pub struct AnimatedValue {
    inner: Rc<RefCell<ValueInner>>,
}

struct ValueInner {
    value: f32,
    offset: f32,
    clock: FrameClock,
    listeners: ListenerRegistry<f32>,
    running: Option<RunningAnimation>,
    next_animation_id: u64,
}

struct RunningAnimation {
    id: AnimationId,
    driver: Driver,
    registration: Option<FrameCallbackRegistration>,
    on_end: Option<EndCallback>,
}

impl ValueInner {
    fn observed(&self) -> f32 {
        self.value + self.offset
    }
}

impl AnimatedValue {
    pub fn new(clock: &FrameClock, initial: f32) -> Self {
        let inner = ValueInner {
            value: initial,
            offset: 0.0,
            clock: clock.clone(),
            listeners: ListenerRegistry::new(),
            running: None,
            next_animation_id: 0,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Observed value, offset included.
    pub fn get(&self) -> f32 {
        self.inner.borrow().observed()
    }

    pub fn value(&self) -> f32 {
        self.inner.borrow().value
    }

    pub fn offset(&self) -> f32 {
        self.inner.borrow().offset
    }

    pub fn clock(&self) -> FrameClock {
        self.inner.borrow().clock.clone()
    }

    pub fn is_animating(&self) -> bool {
        self.inner.borrow().running.is_some()
    }

    /// Write the value directly, stopping any running transition.
    pub fn set_value(&self, value: f32) {
        self.write(|inner| inner.value = value);
    }

    /// Set the offset added on top of the value. Does not stop transitions.
    pub fn set_offset(&self, offset: f32) {
        let (listeners, observed) = {
            let mut inner = self.inner.borrow_mut();
            inner.offset = offset;
            (inner.listeners.snapshot(), inner.observed())
        };
        listeners.notify(&observed);
    }

    /// Fold the offset into the value and reset the offset to zero.
    pub fn flatten_offset(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.value += inner.offset;
        inner.offset = 0.0;
    }

    /// Move the value into the offset and reset the value to zero.
    pub fn extract_offset(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.offset += inner.value;
        inner.value = 0.0;
    }

    /// Stop any running transition where it stands and return the observed
    /// value.
    pub fn stop_animation(&self) -> f32 {
        let preempted = self.inner.borrow_mut().running.take();
        end_preempted(preempted);
        self.get()
    }

    pub fn add_listener(&self, listener: impl Fn(f32) + 'static) -> ListenerId {
        self.inner
            .borrow_mut()
            .listeners
            .add(move |value: &f32| listener(*value))
    }

    pub fn remove_listener(&self, id: ListenerId) -> bool {
        self.inner.borrow_mut().listeners.remove(id)
    }

    pub fn remove_all_listeners(&self) {
        self.inner.borrow_mut().listeners.clear();
    }

    /// View this value through `interpolator`.
    pub fn interpolate<T: Lerp>(&self, interpolator: Interpolator<T>) -> Interpolated<T> {
        Interpolated::new(self.clone(), interpolator)
    }

    pub(crate) fn downgrade(&self) -> WeakAnimatedValue {
        WeakAnimatedValue {
            inner: Rc::downgrade(&self.inner),
        }
    }

    fn write(&self, update: impl FnOnce(&mut ValueInner)) {
        let (preempted, listeners, observed) = {
            let mut inner = self.inner.borrow_mut();
            let preempted = inner.running.take();
            update(&mut inner);
            (preempted, inner.listeners.snapshot(), inner.observed())
        };
        listeners.notify(&observed);
        end_preempted(preempted);
    }

    /// Start driving the value toward `to`, preempting whatever was running.
    pub(crate) fn animate(
        &self,
        to: f32,
        profile: MotionProfile,
        on_end: EndCallback,
    ) -> AnimationId {
        let (id, from, preempted) = {
            let mut inner = self.inner.borrow_mut();
            let preempted = inner.running.take();
            let carried_velocity = preempted
                .as_ref()
                .map_or(0.0, |running| running.driver.velocity());

            let id = AnimationId(inner.next_animation_id);
            inner.next_animation_id += 1;

            let start_nanos = inner.clock.current_frame_nanos();
            let driver = Driver::new(profile, inner.value, to, start_nanos, carried_velocity);
            let registration = schedule(&inner.clock, Rc::downgrade(&self.inner), id);
            inner.running = Some(RunningAnimation {
                id,
                driver,
                registration: Some(registration),
                on_end: Some(on_end),
            });
            (id, inner.value, preempted)
        };
        log::debug!("animation {:?} started: {} -> {}", id, from, to);
        end_preempted(preempted);
        id
    }

    /// Preempt the animation `id` if it is still the one running.
    pub(crate) fn cancel_animation(&self, id: AnimationId) {
        let preempted = {
            let mut inner = self.inner.borrow_mut();
            match inner.running.as_ref() {
                Some(running) if running.id == id => inner.running.take(),
                _ => None,
            }
        };
        end_preempted(preempted);
    }

    fn on_frame(&self, id: AnimationId, frame_nanos: u64) {
        let (listeners, observed, ended) = {
            let mut guard = self.inner.borrow_mut();
            let inner = &mut *guard;
            let Some(running) = inner.running.as_mut() else {
                return;
            };
            if running.id != id {
                return;
            }
            running.registration = None;
            let step = running.driver.step(frame_nanos);
            inner.value = step.value;
            log::trace!("animation {:?} at {} (t={}ns)", id, step.value, frame_nanos);

            let ended = if step.finished {
                inner
                    .running
                    .take()
                    .map(|mut running| (running.driver.target(), running.on_end.take()))
            } else {
                let registration = schedule(&inner.clock, Rc::downgrade(&self.inner), id);
                running.registration = Some(registration);
                None
            };
            (inner.listeners.snapshot(), inner.observed(), ended)
        };

        listeners.notify(&observed);
        if let Some((target, on_end)) = ended {
            log::debug!("animation {:?} completed at {}", id, target);
            if let Some(on_end) = on_end {
                on_end(EndState::Finished);
            }
        }
    }
}

fn schedule(
    clock: &FrameClock,
    inner: Weak<RefCell<ValueInner>>,
    id: AnimationId,
) -> FrameCallbackRegistration {
    clock.with_frame_nanos(move |frame_nanos| {
        if let Some(inner) = inner.upgrade() {
            AnimatedValue { inner }.on_frame(id, frame_nanos);
        }
    })
}

fn end_preempted(preempted: Option<RunningAnimation>) {
    if let Some(mut running) = preempted {
        log::debug!("animation {:?} preempted", running.id);
        running.registration.take();
        if let Some(on_end) = running.on_end.take() {
            on_end(EndState::Preempted);
        }
    }
}

#[derive(Clone)]
pub(crate) struct WeakAnimatedValue {
    inner: Weak<RefCell<ValueInner>>,
}

impl WeakAnimatedValue {
    pub fn upgrade(&self) -> Option<AnimatedValue> {
        self.inner.upgrade().map(|inner| AnimatedValue { inner })
    }
}

/// Pair of listener registrations made by [`AnimatedValueXY::add_listener`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct XYListenerId {
    x: ListenerId,
    y: ListenerId,
}

/// Two tracked axes moved together, e.g. a dragged element's translation.
#[derive(Clone)]
pub struct AnimatedValueXY {
    x: AnimatedValue,
    y: AnimatedValue,
}

impl AnimatedValueXY {
    pub fn new(clock: &FrameClock, initial: Offset) -> Self {
        Self {
            x: AnimatedValue::new(clock, initial.x),
            y: AnimatedValue::new(clock, initial.y),
        }
    }

    pub fn x(&self) -> &AnimatedValue {
        &self.x
    }

    pub fn y(&self) -> &AnimatedValue {
        &self.y
    }

    pub fn get(&self) -> Offset {
        Offset::new(self.x.get(), self.y.get())
    }

    pub fn value(&self) -> Offset {
        Offset::new(self.x.value(), self.y.value())
    }

    pub fn offset(&self) -> Offset {
        Offset::new(self.x.offset(), self.y.offset())
    }

    pub fn set_value(&self, value: Offset) {
        self.x.set_value(value.x);
        self.y.set_value(value.y);
    }

    pub fn set_offset(&self, offset: Offset) {
        self.x.set_offset(offset.x);
        self.y.set_offset(offset.y);
    }

    pub fn flatten_offset(&self) {
        self.x.flatten_offset();
        self.y.flatten_offset();
    }

    pub fn extract_offset(&self) {
        self.x.extract_offset();
        self.y.extract_offset();
    }

    pub fn stop_animation(&self) -> Offset {
        Offset::new(self.x.stop_animation(), self.y.stop_animation())
    }

    pub fn is_animating(&self) -> bool {
        self.x.is_animating() || self.y.is_animating()
    }

    /// Observe both axes. The listener receives the full offset whenever
    /// either axis changes.
    pub fn add_listener(&self, listener: impl Fn(Offset) + 'static) -> XYListenerId {
        let listener = Rc::new(listener);
        let x = {
            let listener = Rc::clone(&listener);
            let other = self.y.downgrade();
            self.x.add_listener(move |x| {
                if let Some(y) = other.upgrade() {
                    listener(Offset::new(x, y.get()));
                }
            })
        };
        let y = {
            let other = self.x.downgrade();
            self.y.add_listener(move |y| {
                if let Some(x) = other.upgrade() {
                    listener(Offset::new(x.get(), y));
                }
            })
        };
        XYListenerId { x, y }
    }

    pub fn remove_listener(&self, id: XYListenerId) -> bool {
        let removed_x = self.x.remove_listener(id.x);
        let removed_y = self.y.remove_listener(id.y);
        removed_x && removed_y
    }

    pub fn remove_all_listeners(&self) {
        self.x.remove_all_listeners();
        self.y.remove_all_listeners();
    }
}

#[cfg(test)]
#[path = "tests/value_tests.rs"]
mod tests;
