//! Animation system for panimate
//!
//! Provides tracked values, timed and spring motion, piecewise-linear
//! interpolation into visual properties, and sequential/parallel transition
//! composition with preemption.
//!
//! ```
//! use panimate_animation::{AnimatedValue, InterpolationConfig, Interpolator, TimingSpec, Transition};
//! use panimate_core::FrameClock;
//! use panimate_graphics::Angle;
//!
//! let clock = FrameClock::new();
//! let position = AnimatedValue::new(&clock, 0.0);
//! let rotation = position.interpolate(
//!     Interpolator::new(
//!         InterpolationConfig::<Angle>::parsed([-250.0, 250.0], &["-15deg", "15deg"])
//!             .unwrap()
//!             .clamp(),
//!     )
//!     .unwrap(),
//! );
//!
//! Transition::timing(&position, 250.0, TimingSpec::linear(100)).start(|| {});
//! clock.drain_frame_callbacks(0);
//! clock.drain_frame_callbacks(100_000_000);
//! assert_eq!(rotation.get().to_string(), "15deg");
//! ```

mod driver;
mod easing;
mod error;
mod interpolate;
mod lerp;
mod spec;
mod transition;
mod value;

pub use easing::Easing;
pub use error::ConfigError;
pub use interpolate::{
    Extrapolate, InterpolationConfig, InterpolationTable, Interpolated, Interpolator,
};
pub use lerp::Lerp;
pub use spec::{MotionProfile, SpringSpec, TimingSpec};
pub use transition::{Transition, TransitionHandle};
pub use value::{AnimatedValue, AnimatedValueXY, XYListenerId};

pub mod prelude {
    pub use crate::{
        AnimatedValue, AnimatedValueXY, Easing, Extrapolate, InterpolationConfig, Interpolator,
        MotionProfile, SpringSpec, TimingSpec, Transition,
    };
}
