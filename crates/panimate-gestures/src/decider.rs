//! Classification of a released pan against directional thresholds.

use panimate_animation::ConfigError;
use panimate_graphics::Offset;

/// Which axis wins when a release exceeds thresholds on both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisPriority {
    #[default]
    VerticalFirst,
    HorizontalFirst,
}

/// Where a released pan ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureOutcome {
    /// No threshold exceeded.
    Center,
    Left,
    Right,
    Up,
    Down,
    /// Released within the tap slop.
    CornerAdvance,
}

impl GestureOutcome {
    /// Whether a threshold was exceeded.
    pub fn is_swipe(self) -> bool {
        matches!(
            self,
            GestureOutcome::Left | GestureOutcome::Right | GestureOutcome::Up | GestureOutcome::Down
        )
    }
}

/// Release thresholds in logical pixels relative to the origin.
///
/// `left` and `up` are negative, `right` and `down` positive. A side left as
/// `None` never triggers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReleaseThresholds {
    pub left: Option<f32>,
    pub right: Option<f32>,
    pub up: Option<f32>,
    pub down: Option<f32>,
    pub priority: AxisPriority,
    pub tap_slop: Option<f32>,
}

impl ReleaseThresholds {
    /// `-limit` on the left and `limit` on the right.
    pub fn horizontal(limit: f32) -> Self {
        Self {
            left: Some(-limit),
            right: Some(limit),
            ..Self::default()
        }
    }

    /// `-limit` above and `limit` below.
    pub fn vertical(limit: f32) -> Self {
        Self {
            up: Some(-limit),
            down: Some(limit),
            ..Self::default()
        }
    }

    /// No swipe thresholds, only tap detection.
    pub fn tap(slop: f32) -> Self {
        Self::default().with_tap_slop(slop)
    }

    pub fn with_left(mut self, left: f32) -> Self {
        self.left = Some(left);
        self
    }

    pub fn with_right(mut self, right: f32) -> Self {
        self.right = Some(right);
        self
    }

    pub fn with_up(mut self, up: f32) -> Self {
        self.up = Some(up);
        self
    }

    pub fn with_down(mut self, down: f32) -> Self {
        self.down = Some(down);
        self
    }

    pub fn with_priority(mut self, priority: AxisPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_tap_slop(mut self, slop: f32) -> Self {
        self.tap_slop = Some(slop);
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let sides = [
            ("left", self.left, -1.0),
            ("up", self.up, -1.0),
            ("right", self.right, 1.0),
            ("down", self.down, 1.0),
        ];
        for (side, value, sign) in sides {
            let Some(value) = value else { continue };
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteValue { field: side, value });
            }
            if value * sign <= 0.0 {
                return Err(ConfigError::ThresholdSign {
                    side,
                    expected: if sign < 0.0 { "negative" } else { "positive" },
                    value,
                });
            }
        }
        if let Some(slop) = self.tap_slop {
            if !slop.is_finite() {
                return Err(ConfigError::NonFiniteValue {
                    field: "tap slop",
                    value: slop,
                });
            }
            if slop < 0.0 {
                return Err(ConfigError::ThresholdSign {
                    side: "tap slop",
                    expected: "non-negative",
                    value: slop,
                });
            }
        }
        let any_side = [self.left, self.right, self.up, self.down]
            .iter()
            .any(Option::is_some);
        if !any_side && self.tap_slop.is_none() {
            return Err(ConfigError::NoThresholds);
        }
        Ok(())
    }
}

/// Validated [`ReleaseThresholds`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdDecider {
    thresholds: ReleaseThresholds,
}

impl ThresholdDecider {
    pub fn new(thresholds: ReleaseThresholds) -> Result<Self, ConfigError> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> &ReleaseThresholds {
        &self.thresholds
    }

    /// Classify a release position. A position exactly on a threshold has not
    /// exceeded it.
    pub fn decide(&self, offset: Offset) -> GestureOutcome {
        let swipe = match self.thresholds.priority {
            AxisPriority::VerticalFirst => {
                self.vertical(offset.y).or_else(|| self.horizontal(offset.x))
            }
            AxisPriority::HorizontalFirst => {
                self.horizontal(offset.x).or_else(|| self.vertical(offset.y))
            }
        };
        if let Some(outcome) = swipe {
            return outcome;
        }
        match self.thresholds.tap_slop {
            Some(slop) if offset.x.abs() <= slop && offset.y.abs() <= slop => {
                GestureOutcome::CornerAdvance
            }
            _ => GestureOutcome::Center,
        }
    }

    fn horizontal(&self, x: f32) -> Option<GestureOutcome> {
        if self.thresholds.left.is_some_and(|left| x < left) {
            Some(GestureOutcome::Left)
        } else if self.thresholds.right.is_some_and(|right| x > right) {
            Some(GestureOutcome::Right)
        } else {
            None
        }
    }

    fn vertical(&self, y: f32) -> Option<GestureOutcome> {
        if self.thresholds.up.is_some_and(|up| y < up) {
            Some(GestureOutcome::Up)
        } else if self.thresholds.down.is_some_and(|down| y > down) {
            Some(GestureOutcome::Down)
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/decider_tests.rs"]
mod tests;
