use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use panimate_animation::{AnimatedValueXY, ConfigError, SpringSpec, Transition, TransitionHandle};
use panimate_graphics::Offset;

use crate::{
    GestureAxisTracker, GestureOutcome, PanHandlers, PanResponder, ReleaseThresholds,
    ThresholdDecider, TrackerConfig,
};

/// Picks the transition to run after a release. `None` settles immediately.
pub type ReleasePolicy = Box<dyn FnMut(GestureOutcome, Offset) -> Option<Transition>>;

type GrantHandler = Box<dyn FnMut()>;
type SettledHandler = Box<dyn FnMut(GestureOutcome)>;

/// Drag-and-release controller for one tracked position.
///
/// Granting a pan stops whatever transition is moving the position and
/// starts tracking. On release the [`ThresholdDecider`] classifies the
/// resting position, the release policy picks a transition for that outcome,
/// and `on_settled` runs once that transition completes. A new pan that
/// interrupts the transition preempts it and `on_settled` is skipped.
#[derive(Clone)]
pub struct SwipeController {
    inner: Rc<SwipeInner>,
}

struct SwipeInner {
    tracker: GestureAxisTracker,
    decider: ThresholdDecider,
    responder: PanResponder,
    on_grant: RefCell<Option<GrantHandler>>,
    on_release: RefCell<Option<ReleasePolicy>>,
    on_settled: RefCell<Option<SettledHandler>>,
    last_outcome: Cell<Option<GestureOutcome>>,
    settling: RefCell<Option<TransitionHandle>>,
}

pub struct SwipeControllerBuilder {
    position: AnimatedValueXY,
    thresholds: ReleaseThresholds,
    tracker_config: TrackerConfig,
    on_grant: Option<GrantHandler>,
    on_release: Option<ReleasePolicy>,
    on_settled: Option<SettledHandler>,
}

impl SwipeControllerBuilder {
    pub fn tracker_config(mut self, config: TrackerConfig) -> Self {
        self.tracker_config = config;
        self
    }

    /// Runs after tracking has started.
    pub fn on_grant(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_grant = Some(Box::new(handler));
        self
    }

    pub fn on_release(
        mut self,
        policy: impl FnMut(GestureOutcome, Offset) -> Option<Transition> + 'static,
    ) -> Self {
        self.on_release = Some(Box::new(policy));
        self
    }

    pub fn on_settled(mut self, handler: impl FnMut(GestureOutcome) + 'static) -> Self {
        self.on_settled = Some(Box::new(handler));
        self
    }

    pub fn build(self) -> Result<SwipeController, ConfigError> {
        let decider = ThresholdDecider::new(self.thresholds)?;
        let tracker = GestureAxisTracker::new(&self.position, self.tracker_config);
        let on_release = self.on_release.unwrap_or_else(|| spring_home(&self.position));

        let inner = Rc::new_cyclic(|weak: &Weak<SwipeInner>| {
            let grant = weak.clone();
            let moved = weak.clone();
            let release = weak.clone();
            let responder = PanResponder::builder()
                .on_grant(move || {
                    if let Some(inner) = grant.upgrade() {
                        inner.grant();
                    }
                })
                .on_move(move |state| {
                    if let Some(inner) = moved.upgrade() {
                        inner.tracker.move_to(state.dx, state.dy);
                    }
                })
                .on_release(move |state| {
                    if let Some(inner) = release.upgrade() {
                        let offset = inner.tracker.release(state.dx, state.dy);
                        let outcome = inner.decider.decide(offset);
                        log::debug!("released at {:?}: {:?}", offset, outcome);
                        SwipeInner::settle(&inner, outcome, offset);
                    }
                })
                .build();

            SwipeInner {
                tracker,
                decider,
                responder,
                on_grant: RefCell::new(self.on_grant),
                on_release: RefCell::new(Some(on_release)),
                on_settled: RefCell::new(self.on_settled),
                last_outcome: Cell::new(None),
                settling: RefCell::new(None),
            }
        });
        Ok(SwipeController { inner })
    }
}

/// Default release policy: spring back to the origin whatever the outcome.
fn spring_home(position: &AnimatedValueXY) -> ReleasePolicy {
    let position = position.clone();
    Box::new(move |_, _| {
        Some(Transition::spring_xy(
            &position,
            Offset::ZERO,
            SpringSpec::default(),
        ))
    })
}

impl SwipeController {
    pub fn builder(
        position: &AnimatedValueXY,
        thresholds: ReleaseThresholds,
    ) -> SwipeControllerBuilder {
        SwipeControllerBuilder {
            position: position.clone(),
            thresholds,
            tracker_config: TrackerConfig::default(),
            on_grant: None,
            on_release: None,
            on_settled: None,
        }
    }

    pub fn pan_handlers(&self) -> PanHandlers {
        self.inner.responder.pan_handlers()
    }

    pub fn tracker(&self) -> &GestureAxisTracker {
        &self.inner.tracker
    }

    pub fn decider(&self) -> &ThresholdDecider {
        &self.inner.decider
    }

    /// Outcome of the most recent release or [`trigger`](Self::trigger).
    pub fn last_outcome(&self) -> Option<GestureOutcome> {
        self.inner.last_outcome.get()
    }

    /// Whether a post-release transition is still running.
    pub fn is_settling(&self) -> bool {
        self.inner
            .settling
            .borrow()
            .as_ref()
            .is_some_and(TransitionHandle::is_active)
    }

    /// Run the release policy for `outcome` as if a pan had ended there, e.g.
    /// for a button that dismisses without dragging.
    pub fn trigger(&self, outcome: GestureOutcome) {
        if self.inner.tracker.is_active() {
            log::debug!("trigger {:?} ignored: pan in progress", outcome);
            return;
        }
        let offset = self.inner.tracker.offset();
        SwipeInner::settle(&self.inner, outcome, offset);
    }
}

impl SwipeInner {
    fn grant(&self) {
        let settling = self.settling.borrow_mut().take();
        if let Some(settling) = settling {
            settling.cancel();
        }
        self.tracker.begin();
        let handler = self.on_grant.borrow_mut().take();
        if let Some(mut handler) = handler {
            handler();
            restore(&self.on_grant, handler);
        }
    }

    fn settle(inner: &Rc<SwipeInner>, outcome: GestureOutcome, offset: Offset) {
        inner.last_outcome.set(Some(outcome));
        let transition = {
            let policy = inner.on_release.borrow_mut().take();
            policy.and_then(|mut policy| {
                let transition = policy(outcome, offset);
                restore(&inner.on_release, policy);
                transition
            })
        };

        let Some(transition) = transition else {
            inner.settled(outcome);
            return;
        };
        let weak = Rc::downgrade(inner);
        let handle = transition.start(move || {
            if let Some(inner) = weak.upgrade() {
                inner.settled(outcome);
            }
        });
        let replaced = inner.settling.borrow_mut().replace(handle);
        if let Some(replaced) = replaced {
            replaced.cancel();
        }
    }

    fn settled(&self, outcome: GestureOutcome) {
        log::debug!("settled after {:?}", outcome);
        let handler = self.on_settled.borrow_mut().take();
        if let Some(mut handler) = handler {
            handler(outcome);
            restore(&self.on_settled, handler);
        }
    }
}

/// Put a handler back after running it.
fn restore<T>(slot: &RefCell<Option<T>>, handler: T) {
    let mut slot = slot.borrow_mut();
    if slot.is_none() {
        *slot = Some(handler);
    }
}

#[cfg(test)]
#[path = "tests/swipe_tests.rs"]
mod tests;
