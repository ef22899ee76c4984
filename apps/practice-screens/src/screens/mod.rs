//! The four practice screens.

mod card_swipe;
mod corner_cycle;
mod drag_box;
mod icon_drop;

pub use card_swipe::CardSwipeScreen;
pub use corner_cycle::CornerCycleScreen;
pub use drag_box::DragBoxScreen;
pub use icon_drop::IconDropScreen;

use panimate_animation::{
    AnimatedValue, ConfigError, InterpolationConfig, Interpolated, Interpolator,
};
use panimate_graphics::Rgb;

/// Vertical span over which the box morphs.
const MORPH_RANGE: [f32; 2] = [-300.0, 300.0];

/// Border radius shrinking from 100 at the top to 0 at the bottom.
fn border_radius(y: &AnimatedValue) -> Result<Interpolated<f32>, ConfigError> {
    let interpolator = Interpolator::new(InterpolationConfig::<f32>::new(MORPH_RANGE, [100.0, 0.0]))?;
    Ok(y.interpolate(interpolator))
}

/// Tomato at the top fading to sky blue at the bottom.
fn background(y: &AnimatedValue) -> Result<Interpolated<Rgb>, ConfigError> {
    let config = InterpolationConfig::<Rgb>::parsed(
        MORPH_RANGE,
        &["rgb(255, 99, 71)", "rgb(71, 166, 255)"],
    )?;
    Ok(y.interpolate(Interpolator::new(config)?))
}
