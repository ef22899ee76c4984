use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameCallbackId(u64);

type FrameCallback = Box<dyn FnOnce(u64)>;

#[derive(Default)]
struct FrameCallbacks {
    next_id: u64,
    /// Registration order of the callbacks waiting for the next frame.
    order: Vec<FrameCallbackId>,
    pending: FxHashMap<FrameCallbackId, FrameCallback>,
    frame_time_nanos: Option<u64>,
    in_frame: bool,
}

/// Source of frame ticks for animations.
///
/// Callbacks are one-shot: each registration fires on the next drained frame
/// and must re-register to keep animating. Callbacks registered while a frame
/// is being drained run on the following frame.
#[derive(Clone, Default)]
pub struct FrameClock {
    callbacks: Rc<RefCell<FrameCallbacks>>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let mut callbacks = self.callbacks.borrow_mut();
        let id = FrameCallbackId(callbacks.next_id);
        callbacks.next_id += 1;
        callbacks.order.push(id);
        callbacks.pending.insert(id, Box::new(callback));
        FrameCallbackRegistration {
            callbacks: Rc::downgrade(&self.callbacks),
            id: Some(id),
        }
    }

    pub fn with_frame_millis(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        self.with_frame_nanos(move |nanos| {
            let millis = nanos / crate::NANOS_PER_MILLI;
            callback(millis);
        })
    }

    /// Time of the most recently drained frame, if any frame has run yet.
    pub fn frame_time_nanos(&self) -> Option<u64> {
        self.callbacks.borrow().frame_time_nanos
    }

    /// Time of the frame currently being drained. `None` outside of
    /// [`FrameClock::drain_frame_callbacks`].
    pub fn current_frame_nanos(&self) -> Option<u64> {
        let callbacks = self.callbacks.borrow();
        if callbacks.in_frame {
            callbacks.frame_time_nanos
        } else {
            None
        }
    }

    pub fn has_pending_frame_callbacks(&self) -> bool {
        !self.callbacks.borrow().pending.is_empty()
    }

    /// Run every callback registered before this call, in registration order.
    ///
    /// Returns the number of callbacks that ran. A callback cancelled by an
    /// earlier callback in the same frame is skipped.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) -> usize {
        let (batch, time) = {
            let mut callbacks = self.callbacks.borrow_mut();
            let time = match callbacks.frame_time_nanos {
                Some(previous) if frame_time_nanos < previous => {
                    log::warn!(
                        "frame time went backwards ({} < {}), clamping",
                        frame_time_nanos,
                        previous
                    );
                    previous
                }
                _ => frame_time_nanos,
            };
            callbacks.frame_time_nanos = Some(time);
            callbacks.in_frame = true;
            (std::mem::take(&mut callbacks.order), time)
        };

        let mut ran = 0;
        for id in batch {
            let callback = self.callbacks.borrow_mut().pending.remove(&id);
            if let Some(callback) = callback {
                callback(time);
                ran += 1;
            }
        }
        self.callbacks.borrow_mut().in_frame = false;
        log::trace!("frame at {}ns ran {} callbacks", time, ran);
        ran
    }

    fn cancel(callbacks: &RefCell<FrameCallbacks>, id: FrameCallbackId) {
        // The callback is dropped after the borrow ends; its captures may
        // hold registrations of their own.
        let removed = {
            let mut callbacks = callbacks.borrow_mut();
            let removed = callbacks.pending.remove(&id);
            if removed.is_some() {
                callbacks.order.retain(|pending| *pending != id);
            }
            removed
        };
        drop(removed);
    }
}

/// Keeps a frame callback registered; dropping it cancels the callback.
pub struct FrameCallbackRegistration {
    callbacks: Weak<RefCell<FrameCallbacks>>,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    pub fn id(&self) -> Option<FrameCallbackId> {
        self.id
    }

    pub fn cancel(mut self) {
        self.cancel_inner();
    }

    fn cancel_inner(&mut self) {
        if let Some(id) = self.id.take() {
            if let Some(callbacks) = self.callbacks.upgrade() {
                FrameClock::cancel(&callbacks, id);
            }
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        self.cancel_inner();
    }
}

#[cfg(test)]
#[path = "tests/frame_clock_tests.rs"]
mod tests;
