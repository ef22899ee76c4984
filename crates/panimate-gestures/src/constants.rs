//! Shared gesture thresholds, in logical pixels.

/// Release displacement at or below this distance on both axes counts as a
/// tap rather than a drag.
///
/// Matches the touch slop most platforms use (Android's `TOUCH_SLOP` is 8dp).
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Distance past which a vertical release drops the dragged icon.
pub const DROP_DISTANCE: f32 = 230.0;

/// Distance past which a horizontal release dismisses a card.
pub const DISMISS_DISTANCE: f32 = 220.0;
