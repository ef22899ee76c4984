//! Pan gesture lifecycle: grant, move, release.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use panimate_graphics::Offset;

/// Accumulated displacement since the pan was granted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureState {
    pub dx: f32,
    pub dy: f32,
}

impl GestureState {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    pub fn offset(&self) -> Offset {
        Offset::new(self.dx, self.dy)
    }
}

type Handler = Box<dyn FnMut(GestureState)>;

#[derive(Default)]
struct Handlers {
    grant: RefCell<Option<Handler>>,
    moved: RefCell<Option<Handler>>,
    release: RefCell<Option<Handler>>,
}

struct PanState {
    handlers: Handlers,
    active: Cell<bool>,
    last: Cell<GestureState>,
}

/// Receives pan events for one element.
pub struct PanResponder {
    handlers: PanHandlers,
}

impl PanResponder {
    pub fn builder() -> PanResponderBuilder {
        PanResponderBuilder::default()
    }

    /// Entry points the host feeds pointer events into.
    pub fn pan_handlers(&self) -> PanHandlers {
        self.handlers.clone()
    }
}

#[derive(Default)]
pub struct PanResponderBuilder {
    handlers: Handlers,
}

impl PanResponderBuilder {
    pub fn on_grant(self, mut handler: impl FnMut() + 'static) -> Self {
        self.handlers.grant.replace(Some(Box::new(move |_| handler())));
        self
    }

    pub fn on_move(self, handler: impl FnMut(GestureState) + 'static) -> Self {
        self.handlers.moved.replace(Some(Box::new(handler)));
        self
    }

    pub fn on_release(self, handler: impl FnMut(GestureState) + 'static) -> Self {
        self.handlers.release.replace(Some(Box::new(handler)));
        self
    }

    pub fn build(self) -> PanResponder {
        PanResponder {
            handlers: PanHandlers {
                state: Rc::new(PanState {
                    handlers: self.handlers,
                    active: Cell::new(false),
                    last: Cell::new(GestureState::default()),
                }),
            },
        }
    }
}

/// Cloneable capability that drives a [`PanResponder`].
///
/// Events must arrive as `start`, any number of `move_to`, then `release`
/// or `cancel`. Events that break that order are dropped.
#[derive(Clone)]
pub struct PanHandlers {
    state: Rc<PanState>,
}

impl PanHandlers {
    pub fn is_active(&self) -> bool {
        self.state.active.get()
    }

    pub fn start(&self) {
        if self.state.active.replace(true) {
            log::debug!("pan start ignored: pan already in progress");
            return;
        }
        let state = GestureState::default();
        self.state.last.set(state);
        invoke(&self.state.handlers.grant, state);
    }

    pub fn move_to(&self, dx: f32, dy: f32) {
        if !self.state.active.get() {
            log::debug!("pan move ({}, {}) ignored: no pan in progress", dx, dy);
            return;
        }
        let state = GestureState::new(dx, dy);
        self.state.last.set(state);
        invoke(&self.state.handlers.moved, state);
    }

    pub fn release(&self, dx: f32, dy: f32) {
        if !self.state.active.replace(false) {
            log::debug!("pan release ({}, {}) ignored: no pan in progress", dx, dy);
            return;
        }
        let state = GestureState::new(dx, dy);
        self.state.last.set(state);
        invoke(&self.state.handlers.release, state);
    }

    /// The host took the pointer away; release where the last move left it.
    pub fn cancel(&self) {
        let last = self.state.last.get();
        self.release(last.dx, last.dy);
    }
}

/// Run a handler without holding its slot borrowed, so the handler may feed
/// further events into the same responder.
fn invoke(slot: &RefCell<Option<Handler>>, state: GestureState) {
    let handler = slot.borrow_mut().take();
    if let Some(mut handler) = handler {
        handler(state);
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            *slot = Some(handler);
        }
    }
}

#[cfg(test)]
#[path = "tests/pan_responder_tests.rs"]
mod tests;
