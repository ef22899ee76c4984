//! Gesture handling for panimate
//!
//! A [`GestureAxisTracker`] maps pan deltas onto an [`AnimatedValueXY`], a
//! [`ThresholdDecider`] classifies where the pan was released, and a
//! [`SwipeController`] wires both to a [`PanResponder`] together with the
//! transition that runs after release.
//!
//! [`AnimatedValueXY`]: panimate_animation::AnimatedValueXY

pub mod constants;
mod decider;
mod pan_responder;
mod swipe;
mod tracker;

pub use constants::DRAG_THRESHOLD;
pub use decider::{AxisPriority, GestureOutcome, ReleaseThresholds, ThresholdDecider};
pub use pan_responder::{GestureState, PanHandlers, PanResponder, PanResponderBuilder};
pub use panimate_animation::ConfigError;
pub use swipe::{ReleasePolicy, SwipeController, SwipeControllerBuilder};
pub use tracker::{GestureAxisTracker, TrackedAxes, TrackerConfig};

pub mod prelude {
    pub use crate::{
        AxisPriority, GestureAxisTracker, GestureOutcome, GestureState, PanHandlers,
        PanResponder, ReleaseThresholds, SwipeController, ThresholdDecider, TrackedAxes,
        TrackerConfig,
    };
}
