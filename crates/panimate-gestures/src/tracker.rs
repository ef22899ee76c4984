use std::cell::Cell;

use panimate_animation::AnimatedValueXY;
use panimate_graphics::Offset;

/// Axes a tracker lets a pan move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackedAxes {
    Horizontal,
    Vertical,
    #[default]
    Both,
}

impl TrackedAxes {
    pub fn tracks_x(self) -> bool {
        matches!(self, TrackedAxes::Horizontal | TrackedAxes::Both)
    }

    pub fn tracks_y(self) -> bool {
        matches!(self, TrackedAxes::Vertical | TrackedAxes::Both)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerConfig {
    pub axes: TrackedAxes,
    /// Start each pan from where the previous one left the value. When off,
    /// every pan measures from the origin.
    pub accumulate: bool,
}

impl TrackerConfig {
    pub fn horizontal() -> Self {
        Self {
            axes: TrackedAxes::Horizontal,
            ..Self::default()
        }
    }

    pub fn with_axes(mut self, axes: TrackedAxes) -> Self {
        self.axes = axes;
        self
    }

    pub fn with_accumulate(mut self, accumulate: bool) -> Self {
        self.accumulate = accumulate;
        self
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            axes: TrackedAxes::Both,
            accumulate: true,
        }
    }
}

/// Maps pan deltas onto a tracked 2D value.
///
/// While a pan is active the observed position is `baseline + delta`. The
/// baseline lives in the value's offset, so interpolated views keep reading
/// the full position throughout the drag.
pub struct GestureAxisTracker {
    position: AnimatedValueXY,
    config: TrackerConfig,
    active: Cell<bool>,
}

impl GestureAxisTracker {
    pub fn new(position: &AnimatedValueXY, config: TrackerConfig) -> Self {
        Self {
            position: position.clone(),
            config,
            active: Cell::new(false),
        }
    }

    pub fn position(&self) -> &AnimatedValueXY {
        &self.position
    }

    pub fn config(&self) -> TrackerConfig {
        self.config
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Observed position, baseline included.
    pub fn offset(&self) -> Offset {
        self.position.get()
    }

    /// Start a pan. Any transition still moving the value stops where it is.
    pub fn begin(&self) {
        let stopped_at = self.position.stop_animation();
        if self.config.accumulate {
            self.position.extract_offset();
        } else {
            self.position.set_offset(Offset::ZERO);
        }
        self.active.set(true);
        log::debug!("pan began at {:?}", stopped_at);
    }

    pub fn move_to(&self, dx: f32, dy: f32) {
        if !self.active.get() {
            log::debug!("pan move ({}, {}) ignored: no pan in progress", dx, dy);
            return;
        }
        if self.config.axes.tracks_x() {
            self.position.x().set_value(dx);
        }
        if self.config.axes.tracks_y() {
            self.position.y().set_value(dy);
        }
    }

    /// Finish the pan, folding the baseline back into the value. Calling it
    /// again without a new [`begin`](Self::begin) does nothing.
    pub fn end(&self) {
        if !self.active.replace(false) {
            return;
        }
        self.position.flatten_offset();
    }

    /// Apply the final delta, end the pan and return the resting position.
    pub fn release(&self, dx: f32, dy: f32) -> Offset {
        self.move_to(dx, dy);
        self.end();
        self.offset()
    }
}

#[cfg(test)]
#[path = "tests/tracker_tests.rs"]
mod tests;
