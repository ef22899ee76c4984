//! Composable transitions over tracked values.
//!
//! A [`Transition`] is a reusable description; [`Transition::start`] runs it
//! and returns a [`TransitionHandle`]. Leaves drive one [`AnimatedValue`]
//! each and composites order them:
//!
//! - `sequence` starts each member only after the previous one finished;
//! - `parallel` starts every member at once and finishes when all have;
//! - `looped` restarts its body after every pass.
//!
//! The continuation given to `start` runs exactly once when the whole
//! transition finishes. If any part is preempted (another transition takes
//! over one of its values, the value is written directly, or the handle is
//! cancelled) the run is abandoned and the continuation is dropped unrun.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use panimate_core::{FrameCallbackRegistration, FrameClock, NANOS_PER_MILLI};
use panimate_graphics::Offset;
use smallvec::SmallVec;

use crate::value::{AnimationId, EndCallback, EndState, WeakAnimatedValue};
use crate::{AnimatedValue, AnimatedValueXY, MotionProfile, SpringSpec, TimingSpec};

#[derive(Clone)]
pub struct Transition {
    kind: TransitionKind,
}

#[derive(Clone)]
enum TransitionKind {
    Animate {
        value: AnimatedValue,
        to: f32,
        profile: MotionProfile,
    },
    Delay {
        clock: FrameClock,
        millis: u64,
    },
    Sequence(Rc<[Transition]>),
    Parallel {
        members: Rc<[Transition]>,
        stop_together: bool,
    },
    Loop {
        body: Rc<Transition>,
        iterations: Option<u32>,
    },
}

impl Transition {
    pub fn to(value: &AnimatedValue, to: f32, profile: impl Into<MotionProfile>) -> Self {
        Self {
            kind: TransitionKind::Animate {
                value: value.clone(),
                to,
                profile: profile.into(),
            },
        }
    }

    pub fn timing(value: &AnimatedValue, to: f32, spec: TimingSpec) -> Self {
        Self::to(value, to, spec)
    }

    pub fn spring(value: &AnimatedValue, to: f32, spec: SpringSpec) -> Self {
        Self::to(value, to, spec)
    }

    /// Both axes at once with the same profile.
    pub fn to_xy(value: &AnimatedValueXY, to: Offset, profile: impl Into<MotionProfile>) -> Self {
        let profile = profile.into();
        Self::parallel([
            Self::to(value.x(), to.x, profile),
            Self::to(value.y(), to.y, profile),
        ])
    }

    pub fn timing_xy(value: &AnimatedValueXY, to: Offset, spec: TimingSpec) -> Self {
        Self::to_xy(value, to, spec)
    }

    pub fn spring_xy(value: &AnimatedValueXY, to: Offset, spec: SpringSpec) -> Self {
        Self::to_xy(value, to, spec)
    }

    /// Wait `millis` of frame time without touching any value.
    pub fn delay(clock: &FrameClock, millis: u64) -> Self {
        Self {
            kind: TransitionKind::Delay {
                clock: clock.clone(),
                millis,
            },
        }
    }

    pub fn sequence(members: impl IntoIterator<Item = Transition>) -> Self {
        Self {
            kind: TransitionKind::Sequence(members.into_iter().collect()),
        }
    }

    /// Run members together. If one is preempted the others are stopped too.
    pub fn parallel(members: impl IntoIterator<Item = Transition>) -> Self {
        Self {
            kind: TransitionKind::Parallel {
                members: members.into_iter().collect(),
                stop_together: true,
            },
        }
    }

    /// Like [`Transition::parallel`], but a preempted member leaves its
    /// siblings running. The group still never completes.
    pub fn parallel_independent(members: impl IntoIterator<Item = Transition>) -> Self {
        Self {
            kind: TransitionKind::Parallel {
                members: members.into_iter().collect(),
                stop_together: false,
            },
        }
    }

    /// Repeat `body`; `None` repeats until preempted.
    pub fn looped(body: Transition, iterations: Option<u32>) -> Self {
        Self {
            kind: TransitionKind::Loop {
                body: Rc::new(body),
                iterations,
            },
        }
    }

    /// Run the transition; `on_complete` runs once when it finishes and never
    /// if it is preempted.
    pub fn start(&self, on_complete: impl FnOnce() + 'static) -> TransitionHandle {
        self.launch(Box::new(move |end| match end {
            EndState::Finished => on_complete(),
            EndState::Preempted => log::debug!("transition preempted, completion dropped"),
        }))
    }

    pub fn start_detached(&self) -> TransitionHandle {
        self.start(|| {})
    }

    /// Whether the transition finishes synchronously when started, which only
    /// empty composites do.
    fn is_instant(&self) -> bool {
        match &self.kind {
            TransitionKind::Animate { .. } | TransitionKind::Delay { .. } => false,
            TransitionKind::Sequence(members) => members.iter().all(Transition::is_instant),
            TransitionKind::Parallel { members, .. } => {
                members.iter().all(Transition::is_instant)
            }
            TransitionKind::Loop { body, iterations } => {
                *iterations == Some(0) || body.is_instant()
            }
        }
    }

    fn launch(&self, on_end: EndCallback) -> TransitionHandle {
        let active = Rc::new(Cell::new(true));
        let on_end: EndCallback = {
            let active = Rc::clone(&active);
            Box::new(move |end| {
                active.set(false);
                on_end(end);
            })
        };

        let node = match &self.kind {
            TransitionKind::Animate { value, to, profile } => {
                let id = value.animate(*to, *profile, on_end);
                HandleNode::Leaf {
                    value: value.downgrade(),
                    id,
                }
            }
            TransitionKind::Delay { clock, millis } => {
                HandleNode::Delay(launch_delay(clock, *millis, on_end))
            }
            TransitionKind::Sequence(members) => {
                let group = Rc::new(RefCell::new(GroupState::default()));
                sequence_step(Rc::clone(members), 0, Rc::clone(&group), on_end);
                HandleNode::Group(group)
            }
            TransitionKind::Parallel {
                members,
                stop_together,
            } => HandleNode::Group(launch_parallel(members, *stop_together, on_end)),
            TransitionKind::Loop { body, iterations } => {
                let group = Rc::new(RefCell::new(GroupState::default()));
                loop_step(Rc::clone(body), 0, *iterations, Rc::clone(&group), on_end);
                HandleNode::Group(group)
            }
        };

        TransitionHandle { node, active }
    }
}

/// Running transition. Cloning shares the same run.
#[derive(Clone)]
pub struct TransitionHandle {
    node: HandleNode,
    active: Rc<Cell<bool>>,
}

#[derive(Clone)]
enum HandleNode {
    Leaf {
        value: WeakAnimatedValue,
        id: AnimationId,
    },
    Delay(Rc<RefCell<DelayState>>),
    Group(Rc<RefCell<GroupState>>),
}

impl TransitionHandle {
    /// `false` once the run has finished or been preempted.
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Preempt the run. Values stay where they are and the continuation
    /// never runs. Cancelling a finished run does nothing.
    pub fn cancel(&self) {
        match &self.node {
            HandleNode::Leaf { value, id } => {
                if let Some(value) = value.upgrade() {
                    value.cancel_animation(*id);
                }
            }
            HandleNode::Delay(state) => cancel_delay(state),
            HandleNode::Group(group) => {
                let members = {
                    let mut group = group.borrow_mut();
                    group.cancelled = true;
                    std::mem::take(&mut group.members)
                };
                for member in members {
                    member.cancel();
                }
            }
        }
    }
}

#[derive(Default)]
struct GroupState {
    members: SmallVec<[TransitionHandle; 4]>,
    /// Index of the member (sequence) or pass (loop) launched last.
    step: u64,
    cancelled: bool,
}

impl GroupState {
    fn begin_step(&mut self, step: u64) {
        self.step = step;
        self.members.clear();
    }

    /// Record the handle for `step` unless a synchronous completion has
    /// already moved the group further.
    fn record(&mut self, step: u64, handle: TransitionHandle) {
        if self.step == step {
            self.members.push(handle);
        }
    }
}

fn sequence_step(
    members: Rc<[Transition]>,
    index: usize,
    group: Rc<RefCell<GroupState>>,
    on_end: EndCallback,
) {
    if group.borrow().cancelled {
        on_end(EndState::Preempted);
        return;
    }
    group.borrow_mut().begin_step(index as u64);
    let Some(member) = members.get(index).cloned() else {
        on_end(EndState::Finished);
        return;
    };

    let handle = {
        let members = Rc::clone(&members);
        let group = Rc::clone(&group);
        member.launch(Box::new(move |end| match end {
            EndState::Finished => sequence_step(members, index + 1, group, on_end),
            EndState::Preempted => on_end(EndState::Preempted),
        }))
    };
    group.borrow_mut().record(index as u64, handle);
}

fn loop_step(
    body: Rc<Transition>,
    pass: u32,
    iterations: Option<u32>,
    group: Rc<RefCell<GroupState>>,
    on_end: EndCallback,
) {
    if group.borrow().cancelled {
        on_end(EndState::Preempted);
        return;
    }
    if iterations.is_some_and(|limit| pass >= limit) || body.is_instant() {
        on_end(EndState::Finished);
        return;
    }
    group.borrow_mut().begin_step(pass as u64);
    log::trace!("loop pass {}", pass);

    let handle = {
        let next = Rc::clone(&body);
        let group = Rc::clone(&group);
        body.launch(Box::new(move |end| match end {
            EndState::Finished => loop_step(next, pass + 1, iterations, group, on_end),
            EndState::Preempted => on_end(EndState::Preempted),
        }))
    };
    group.borrow_mut().record(pass as u64, handle);
}

struct ParallelState {
    remaining: Cell<usize>,
    on_end: RefCell<Option<EndCallback>>,
}

impl ParallelState {
    fn settled(&self) -> bool {
        self.on_end.borrow().is_none()
    }

    fn settle(&self, end: EndState) {
        let on_end = self.on_end.borrow_mut().take();
        if let Some(on_end) = on_end {
            on_end(end);
        }
    }
}

fn launch_parallel(
    members: &[Transition],
    stop_together: bool,
    on_end: EndCallback,
) -> Rc<RefCell<GroupState>> {
    let group = Rc::new(RefCell::new(GroupState::default()));
    if members.is_empty() {
        on_end(EndState::Finished);
        return group;
    }

    let state = Rc::new(ParallelState {
        remaining: Cell::new(members.len()),
        on_end: RefCell::new(Some(on_end)),
    });

    for member in members {
        if state.settled() {
            break;
        }
        let handle = {
            let state = Rc::clone(&state);
            let group = Rc::clone(&group);
            member.launch(Box::new(move |end| match end {
                EndState::Finished => {
                    let remaining = state.remaining.get().saturating_sub(1);
                    state.remaining.set(remaining);
                    if remaining == 0 {
                        state.settle(EndState::Finished);
                    }
                }
                EndState::Preempted => {
                    if state.settled() {
                        return;
                    }
                    if stop_together {
                        let siblings = std::mem::take(&mut group.borrow_mut().members);
                        // Settle first so siblings reporting back are ignored.
                        let on_end = state.on_end.borrow_mut().take();
                        for sibling in siblings {
                            sibling.cancel();
                        }
                        if let Some(on_end) = on_end {
                            on_end(EndState::Preempted);
                        }
                    } else {
                        state.settle(EndState::Preempted);
                    }
                }
            }))
        };

        let preempted_during_launch = state.settled() && state.remaining.get() > 0;
        if preempted_during_launch && stop_together {
            handle.cancel();
        } else {
            group.borrow_mut().members.push(handle);
        }
    }
    group
}

struct DelayState {
    clock: FrameClock,
    millis: u64,
    start_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    on_end: Option<EndCallback>,
}

fn launch_delay(clock: &FrameClock, millis: u64, on_end: EndCallback) -> Rc<RefCell<DelayState>> {
    let state = Rc::new(RefCell::new(DelayState {
        clock: clock.clone(),
        millis,
        start_nanos: clock.current_frame_nanos(),
        registration: None,
        on_end: Some(on_end),
    }));
    schedule_delay(&state);
    state
}

fn schedule_delay(state: &Rc<RefCell<DelayState>>) {
    let clock = state.borrow().clock.clone();
    let registration = {
        let state = Rc::clone(state);
        clock.with_frame_nanos(move |frame_nanos| on_delay_frame(&state, frame_nanos))
    };
    state.borrow_mut().registration = Some(registration);
}

fn on_delay_frame(state: &Rc<RefCell<DelayState>>, frame_nanos: u64) {
    let finished = {
        let mut delay = state.borrow_mut();
        delay.registration = None;
        let start = *delay.start_nanos.get_or_insert(frame_nanos);
        let elapsed = frame_nanos.saturating_sub(start);
        if elapsed >= delay.millis.saturating_mul(NANOS_PER_MILLI) {
            Some(delay.on_end.take())
        } else {
            None
        }
    };
    match finished {
        Some(on_end) => {
            if let Some(on_end) = on_end {
                on_end(EndState::Finished);
            }
        }
        None => schedule_delay(state),
    }
}

fn cancel_delay(state: &Rc<RefCell<DelayState>>) {
    let (registration, on_end) = {
        let mut delay = state.borrow_mut();
        (delay.registration.take(), delay.on_end.take())
    };
    drop(registration);
    if let Some(on_end) = on_end {
        on_end(EndState::Preempted);
    }
}

#[cfg(test)]
#[path = "tests/transition_tests.rs"]
mod tests;
