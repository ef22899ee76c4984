use panimate_core::{FrameClock, NANOS_PER_MILLI};

/// Roughly 60 frames per second.
pub const DEFAULT_FRAME_INTERVAL_NANOS: u64 = 16_666_667;

/// Deterministic frame source for tests.
///
/// Time starts at zero and only moves when the driver is told to advance.
pub struct FrameDriver {
    clock: FrameClock,
    now_nanos: u64,
    interval_nanos: u64,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::with_clock(FrameClock::new())
    }

    pub fn with_clock(clock: FrameClock) -> Self {
        Self {
            clock,
            now_nanos: 0,
            interval_nanos: DEFAULT_FRAME_INTERVAL_NANOS,
        }
    }

    /// Use a fixed frame interval, e.g. 10 ms for round-number timestamps.
    pub fn with_interval_millis(mut self, millis: u64) -> Self {
        self.interval_nanos = (millis * NANOS_PER_MILLI).max(1);
        self
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn now_nanos(&self) -> u64 {
        self.now_nanos
    }

    pub fn now_millis(&self) -> u64 {
        self.now_nanos / NANOS_PER_MILLI
    }

    pub fn is_idle(&self) -> bool {
        !self.clock.has_pending_frame_callbacks()
    }

    /// Drain a frame at the current time without advancing it.
    pub fn frame(&mut self) -> usize {
        self.clock.drain_frame_callbacks(self.now_nanos)
    }

    /// Advance one interval and drain a frame.
    pub fn advance_frame(&mut self) -> usize {
        self.now_nanos += self.interval_nanos;
        self.frame()
    }

    /// Advance by `millis`, draining a frame every interval. The last frame
    /// lands exactly on the target time.
    pub fn advance_by_millis(&mut self, millis: u64) {
        let target = self.now_nanos + millis * NANOS_PER_MILLI;
        while self.now_nanos < target {
            self.now_nanos = (self.now_nanos + self.interval_nanos).min(target);
            self.frame();
        }
    }

    /// Advance frame by frame until nothing is scheduled. Returns the number
    /// of frames drained, or `None` if still busy after `max_frames`.
    pub fn run_until_idle(&mut self, max_frames: usize) -> Option<usize> {
        for frames in 0..max_frames {
            if self.is_idle() {
                return Some(frames);
            }
            self.advance_frame();
        }
        self.is_idle().then_some(max_frames)
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}
