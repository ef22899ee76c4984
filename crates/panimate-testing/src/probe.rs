use std::cell::{Cell, RefCell};
use std::rc::Rc;

use panimate_core::{FrameClock, NANOS_PER_MILLI};

/// Counts continuation calls and remembers the frame time of each.
#[derive(Clone)]
pub struct CompletionProbe {
    clock: FrameClock,
    calls: Rc<Cell<usize>>,
    times: Rc<RefCell<Vec<Option<u64>>>>,
}

impl CompletionProbe {
    pub fn new(clock: &FrameClock) -> Self {
        Self {
            clock: clock.clone(),
            calls: Rc::new(Cell::new(0)),
            times: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// A continuation that records into this probe.
    pub fn callback(&self) -> impl FnOnce() + 'static {
        let probe = self.clone();
        move || probe.record()
    }

    pub fn record(&self) {
        self.calls.set(self.calls.get() + 1);
        self.times.borrow_mut().push(self.clock.frame_time_nanos());
    }

    pub fn count(&self) -> usize {
        self.calls.get()
    }

    pub fn fired(&self) -> bool {
        self.count() > 0
    }

    /// Frame time of the first call in milliseconds, if the probe fired
    /// after at least one frame.
    pub fn fired_at_millis(&self) -> Option<u64> {
        self.times
            .borrow()
            .first()
            .copied()
            .flatten()
            .map(|nanos| nanos / NANOS_PER_MILLI)
    }
}
