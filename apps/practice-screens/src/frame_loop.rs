use std::time::Duration;

use panimate_core::FrameClock;
use web_time::Instant;

/// Drains a [`FrameClock`] against wall-clock time at a fixed frame rate.
pub struct FrameLoop {
    clock: FrameClock,
    started: Instant,
    frame_interval: Duration,
}

impl FrameLoop {
    pub fn new(clock: &FrameClock) -> Self {
        Self {
            clock: clock.clone(),
            started: Instant::now(),
            frame_interval: Duration::from_nanos(16_666_667),
        }
    }

    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Run one frame at the current wall-clock time.
    pub fn frame(&self) -> usize {
        let elapsed = self.started.elapsed().as_nanos() as u64;
        self.clock.drain_frame_callbacks(elapsed)
    }

    /// Pace frames for `duration`, calling `on_frame` after each one.
    pub fn run_for(&self, duration: Duration, mut on_frame: impl FnMut(u64)) {
        let deadline = Instant::now() + duration;
        let mut next_frame = Instant::now();
        let mut frame_count = 0u64;
        loop {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            if now < next_frame {
                std::thread::sleep(next_frame - now);
            }
            let ran = self.frame();
            frame_count += 1;
            log::trace!("frame {} ran {} callbacks", frame_count, ran);
            on_frame(frame_count);
            next_frame += self.frame_interval;
        }
        log::debug!("paced {} frames over {:?}", frame_count, duration);
    }

    /// Keep running frames until no callbacks remain or `timeout` passes.
    /// Returns whether the clock went idle.
    pub fn run_until_idle(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.clock.has_pending_frame_callbacks() {
            if Instant::now() >= deadline {
                return false;
            }
            self.frame();
            std::thread::sleep(self.frame_interval);
        }
        true
    }
}
